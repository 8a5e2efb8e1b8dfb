pub mod cmd {
    pub const DATASETS: &str = "schedario datasets";
    pub const PRINT_ALL: &str = "schedario print --all --output schede.html";
}

pub mod fmt {
    pub fn show(dataset: &str, index: usize) -> String {
        format!("schedario show --dataset {} --index {}", dataset, index)
    }

    pub fn show_expand(dataset: &str, index: usize, key: &str) -> String {
        format!(
            "schedario show --dataset {} --index {} --expand '{}'",
            dataset, index, key
        )
    }

    pub fn export(dataset: &str, index: usize) -> String {
        format!("schedario export --dataset {} --index {}", dataset, index)
    }

    pub fn list(dataset: &str) -> String {
        format!("schedario list --dataset {}", dataset)
    }
}
