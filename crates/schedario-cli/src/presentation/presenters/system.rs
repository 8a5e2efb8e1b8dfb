use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CommandResultViewModel, DatasetStatusViewModel, DatasetsViewModel, Guidance, InputViewModel,
    NotesViewModel, StatusBadge,
};
use schedario_engine::datasets;
use schedario_runtime::{Catalog, Config};
use schedario_types::DatasetKey;
use std::path::Path;

pub fn present_datasets(
    data_dir: &Path,
    config: &Config,
    catalog: &Catalog,
) -> CommandResultViewModel<DatasetsViewModel> {
    let datasets: Vec<DatasetStatusViewModel> = DatasetKey::ALL
        .into_iter()
        .map(|key| {
            let config = datasets::config(key);
            DatasetStatusViewModel {
                key,
                label: config.label,
                available: catalog.is_available(key),
                records: catalog.records(key).map(<[_]>::len),
                sections: config.section_order.len(),
                searchable: config.is_searchable(),
            }
        })
        .collect();

    let inputs = catalog
        .summary()
        .into_iter()
        .map(|status| InputViewModel {
            name: status.name,
            loaded: status.loaded,
            records: status.records,
            reason: status.reason,
        })
        .collect();

    let available = datasets.iter().filter(|d| d.available).count();
    let first_available = datasets.iter().find(|d| d.available).map(|d| d.key);

    let mut result = CommandResultViewModel::new(DatasetsViewModel {
        data_dir: data_dir.display().to_string(),
        default_dataset: config.default_dataset,
        datasets,
        inputs,
    });

    result = match (available, first_available) {
        (0, _) => {
            let place = Guidance::new(format!(
                "Place mosi.geojson, mopr.geojson, rcg.geojson and d_rcg.geojson in {}",
                data_dir.display()
            ));
            result
                .with_badge(StatusBadge::warning("No dataset available"))
                .with_suggestion(place)
        }
        (n, Some(key)) => {
            let total = DatasetKey::ALL.len();
            let badge = StatusBadge::success(format!("{} of {} datasets available", n, total));
            let list = Guidance::new("List records").with_command(fmt::list(key.as_str()));
            let print = Guidance::new("Print every card").with_command(cmd::PRINT_ALL);
            result
                .with_badge(badge)
                .with_suggestion(list)
                .with_suggestion(print)
        }
        (_, None) => result,
    };
    result
}

pub fn present_notes(catalog: &Catalog) -> CommandResultViewModel<NotesViewModel> {
    let available = catalog.notes().is_some();
    let result = CommandResultViewModel::new(NotesViewModel {
        available,
        html: catalog.notes_or_fallback().to_string(),
    });
    if available {
        result
    } else {
        result.with_badge(StatusBadge::warning("Correction notes unavailable"))
    }
}
