use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CommandResultViewModel, EmptyStateViewModel, FieldViewModel, Guidance, RecordCardViewModel,
    RecordListEntry, RecordListViewModel, SectionViewModel, StatusBadge,
};
use schedario_engine::{ComposedRecord, Expansion, ExpansionState, datasets};
use schedario_runtime::ListEntry;
use schedario_types::DatasetKey;

pub fn build_record_list(
    dataset: DatasetKey,
    query: &str,
    entries: Vec<ListEntry>,
    total: usize,
) -> RecordListViewModel {
    RecordListViewModel {
        dataset,
        label: datasets::config(dataset).label,
        query: Some(query.to_string()).filter(|q| !q.is_empty()),
        total,
        entries: entries
            .into_iter()
            .map(|entry| RecordListEntry {
                index: entry.index,
                title: entry.item.title,
                meta: entry.item.meta,
                selected: entry.selected,
            })
            .collect(),
    }
}

pub fn present_record_list(
    dataset: DatasetKey,
    query: &str,
    entries: Vec<ListEntry>,
    total: usize,
) -> CommandResultViewModel<RecordListViewModel> {
    let view = build_record_list(dataset, query, entries, total);
    let shown = view.entries.len();
    let first = view.entries.first().map(|e| e.index);
    let mut result = CommandResultViewModel::new(view);

    result = match (shown, first) {
        (0, _) => {
            let clear = Guidance::new("Clear the query to list every record")
                .with_command(fmt::list(dataset.as_str()));
            result
                .with_badge(StatusBadge::info("No records match"))
                .with_suggestion(clear)
        }
        (n, Some(index)) => {
            let label = if n == total {
                format!("{} records", n)
            } else {
                format!("{} of {} records", n, total)
            };
            let command = fmt::show(dataset.as_str(), index);
            let open = Guidance::new("Open a record").with_command(command);
            result
                .with_badge(StatusBadge::success(label))
                .with_suggestion(open)
        }
        (_, None) => result,
    };
    result
}

/// Interactive card, with each truncated field shown per its expansion state.
pub fn build_card(card: &ComposedRecord, expansion: &ExpansionState) -> RecordCardViewModel {
    RecordCardViewModel {
        record_id: card.record_id,
        title: card.header.title.clone(),
        subtitle: card.header.subtitle.clone(),
        badges: card.header.badges.clone(),
        empty_state: card.empty_state,
        sections: card
            .sections
            .iter()
            .map(|section| SectionViewModel {
                name: section.name.clone(),
                full_width: section.full_width,
                fields: section
                    .fields
                    .iter()
                    .map(|field| {
                        let state = expansion.get(card.record_id, &field.key);
                        FieldViewModel {
                            key: field.key.clone(),
                            label: field.label.clone(),
                            text: field.visible_text(state).to_string(),
                            is_empty: field.is_empty,
                            truncated: field.truncated,
                            expanded: field.truncated && state == Expansion::Expanded,
                            affordance: field.affordance(state),
                        }
                    })
                    .collect(),
            })
            .collect(),
        dropped_keys: card.dropped_keys.clone(),
        children: card
            .children
            .iter()
            .map(|child| build_card(child, expansion))
            .collect(),
    }
}

pub fn present_card(
    card: &ComposedRecord,
    expansion: &ExpansionState,
) -> CommandResultViewModel<RecordCardViewModel> {
    let view = build_card(card, expansion);
    let dataset = card.record_id.dataset.as_str();
    let index = card.record_id.index;

    let collapsed = collapsed_key(card, expansion).or_else(|| collapsed_child_key(card, expansion));

    let mut result = CommandResultViewModel::new(view);
    let dropped = card.dropped_keys.len();
    if dropped > 0 {
        let noun = match dropped {
            1 => "property",
            _ => "properties",
        };
        let badge = format!("{} unknown {} not shown", dropped, noun);
        result = result.with_badge(StatusBadge::warning(badge));
    }
    if let Some(key) = collapsed {
        let command = fmt::show_expand(dataset, index, &key);
        let expand = Guidance::new("Read a truncated field in full").with_command(command);
        result = result.with_suggestion(expand);
    }
    let export = Guidance::new("Export this record").with_command(fmt::export(dataset, index));
    result.with_suggestion(export)
}

/// First collapsed field among the children, as `position:key`.
fn collapsed_child_key(card: &ComposedRecord, expansion: &ExpansionState) -> Option<String> {
    for (position, child) in card.children.iter().enumerate() {
        if let Some(key) = collapsed_key(child, expansion) {
            return Some(format!("{}:{}", position, key));
        }
    }
    None
}

fn collapsed_key(card: &ComposedRecord, expansion: &ExpansionState) -> Option<String> {
    card.truncated_fields()
        .find(|field| expansion.get(card.record_id, &field.key) == Expansion::Collapsed)
        .map(|field| field.key.clone())
}

pub fn present_empty_state(
    dataset: DatasetKey,
    message: &'static str,
) -> CommandResultViewModel<EmptyStateViewModel> {
    let label = datasets::config(dataset).label;
    let badge = StatusBadge::warning(format!("{} unavailable", label));
    let check = Guidance::new("Check which inputs loaded").with_command(cmd::DATASETS);
    CommandResultViewModel::new(EmptyStateViewModel { dataset, message })
        .with_badge(badge)
        .with_suggestion(check)
}

#[cfg(test)]
mod tests {
    use super::*;
    use schedario_engine::{Target, compose_with_children};
    use schedario_types::{Feature, PropertyMap, RecordId};

    fn survey_card() -> ComposedRecord {
        let unit = |id: &str, notes: String| {
            let mut props = PropertyMap::new();
            props.insert("Codice identificativo (RCGY) [*]", id);
            props.insert("Note (CTN)", notes);
            Feature::new(props)
        };
        let props: PropertyMap = [("Metodo di ricognizione (RCGM)", "sistematica")]
            .into_iter()
            .collect();
        let root = Feature::new(props);
        let children = vec![
            unit("U.R. 2", "a".repeat(400)),
            unit("U.R. 1", "b".repeat(400)),
        ];
        compose_with_children(
            &root,
            &children,
            datasets::config(DatasetKey::Ricognizioni),
            RecordId::new(DatasetKey::Ricognizioni, 0),
            Target::Interactive,
        )
    }

    #[test]
    fn test_card_reflects_expansion_per_unit() {
        let card = survey_card();
        let mut expansion = ExpansionState::new();
        card.register_truncations(&mut expansion);
        expansion.toggle(card.children[1].record_id, "Note (CTN)");

        let view = build_card(&card, &expansion);
        let note = |child: &RecordCardViewModel| {
            child.sections[0]
                .fields
                .iter()
                .find(|f| f.key == "Note (CTN)")
                .cloned()
                .unwrap()
        };

        let first = note(&view.children[0]);
        assert!(first.truncated && !first.expanded);
        assert_eq!(first.text.chars().count(), 301);
        assert_eq!(first.affordance, Some("...leggi tutto"));

        let second = note(&view.children[1]);
        assert!(second.expanded);
        assert_eq!(second.text, "a".repeat(400));
        assert_eq!(second.affordance, Some("chiudi"));
    }

    #[test]
    fn test_card_suggests_expanding_collapsed_field() {
        let card = survey_card();
        let mut expansion = ExpansionState::new();
        card.register_truncations(&mut expansion);

        let result = present_card(&card, &expansion);
        assert!(result.badge.is_none());
        let expand = result
            .suggestions
            .iter()
            .find_map(|g| g.command.as_deref().filter(|c| c.contains("--expand")))
            .unwrap();
        assert!(expand.ends_with("--expand '0:Note (CTN)'"));
    }
}
