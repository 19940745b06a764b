use super::*;
use crate::payload::MolecularFormat;

fn table_text(columns: usize) -> String {
    let names: Vec<String> = (0..columns).map(|i| format!("c{i}")).collect();
    let row: Vec<usize> = (0..columns).collect();
    let body = serde_json::json!({ "columns": names, "data": [row] });
    format!("data:text/table,{body}")
}

#[test]
fn rich_batch_never_falls_back() {
    let items = vec![
        Item::new(1, 0, "data:text/html,<p>a</p>"),
        Item::new(2, 0, "data:text/plain,b"),
        Item::new(3, 0, "data:text/table,broken"),
    ];
    assert!(matches!(plan_batch(&items, &RenderConfig::default()), BatchPlan::Rich(_)));
}

#[test]
fn one_plain_item_sends_whole_batch_to_fallback() {
    let items = vec![Item::new(1, 0, "data:text/html,<p>a</p>"), Item::new(2, 0, "loss went down")];
    assert_eq!(plan_batch(&items, &RenderConfig::default()), BatchPlan::Fallback);
}

#[test]
fn empty_batch_falls_back() {
    assert_eq!(plan_batch(&[], &RenderConfig::default()), BatchPlan::Fallback);
}

#[test]
fn rich_items_are_ordered_most_recent_first() {
    let items: Vec<Item> = (1..=3).map(|step| Item::new(step, 0, "data:text/html,x")).collect();
    let BatchPlan::Rich(plans) = plan_batch(&items, &RenderConfig::default()) else {
        panic!("expected rich plan");
    };
    let steps: Vec<i64> = plans.iter().map(|p| p.step).collect();
    assert_eq!(steps, vec![3, 2, 1]);
    let positions: Vec<usize> = plans.iter().map(|p| p.position).collect();
    assert_eq!(positions, vec![2, 1, 0]);
}

#[test]
fn wide_table_uses_full_page_surface() {
    let config = RenderConfig::default();
    let plan = plan_item(&Item::new(1, 0, table_text(51)), 0, &config);
    assert_eq!(plan.kind, PayloadKind::Table);
    let Block::Surface { kind, document } = plan.block else {
        panic!("expected surface block");
    };
    assert_eq!(kind, SurfaceKind::Table);
    assert!(document.contains("<th>c50</th>"));
}

#[test]
fn narrow_table_uses_in_page_grid() {
    let plan = plan_item(&Item::new(1, 0, table_text(10)), 0, &RenderConfig::default());
    let Block::Grid(table) = plan.block else {
        panic!("expected grid block");
    };
    assert_eq!(table.column_count(), 10);
}

#[test]
fn threshold_is_exclusive_and_configurable() {
    let config = RenderConfig::default();
    assert_eq!(table_strategy(50, &config), TableStrategy::InPageGrid);
    assert_eq!(table_strategy(51, &config), TableStrategy::FullPageSurface);

    let always_large = RenderConfig { large_table_columns: 0, ..RenderConfig::default() };
    assert_eq!(table_strategy(1, &always_large), TableStrategy::FullPageSurface);
}

#[test]
fn malformed_table_becomes_inline_error() {
    let plan = plan_item(&Item::new(4, 0, "data:text/table,not-json"), 0, &RenderConfig::default());
    let Block::Error(error) = plan.block else {
        panic!("expected error block");
    };
    assert_eq!(error.kind, PayloadKind::Table);
    assert!(error.message.contains("not valid JSON"));
}

#[test]
fn molecular_item_keeps_format_and_body() {
    let plan = plan_item(&Item::new(1, 0, "data:text/sdf,benzene\n  6  6"), 0, &RenderConfig::default());
    assert_eq!(
        plan.block,
        Block::Molecule(MolecularPayload { format: MolecularFormat::Sdf, body: "benzene\n  6  6".to_owned() })
    );
}

#[test]
fn html_item_becomes_html_surface() {
    let plan = plan_item(&Item::new(1, 0, "data:text/html,<h1>t</h1>"), 0, &RenderConfig::default());
    assert_eq!(plan.block, Block::Surface { kind: SurfaceKind::Html, document: "<h1>t</h1>".to_owned() });
}

#[test]
fn unknown_rich_subtype_renders_as_text() {
    let plan = plan_item(&Item::new(1, 0, "data:text/plain,hi"), 0, &RenderConfig::default());
    assert_eq!(plan.kind, PayloadKind::PlainText);
    assert_eq!(plan.block, Block::Text("data:text/plain,hi".to_owned()));
}

#[test]
fn planning_does_not_mutate_items() {
    let items = vec![Item::new(1, 2, "data:text/table,{\"columns\":[\"a\"],\"data\":[[1]]}")];
    let before = items.clone();
    let _ = plan_batch(&items, &RenderConfig::default());
    assert_eq!(items, before);
}

#[test]
fn view_key_survives_appending_items() {
    let first = vec![Item::new(1, 0, "data:text/html,a"), Item::new(2, 0, "data:text/html,b")];
    let mut second = first.clone();
    second.push(Item::new(3, 0, "data:text/html,c"));

    let keys = |items: &[Item]| -> Vec<u64> {
        let BatchPlan::Rich(plans) = plan_batch(items, &RenderConfig::default()) else {
            panic!("expected rich plan");
        };
        plans.iter().map(|p| p.key).collect()
    };
    let before = keys(&first);
    let after = keys(&second);
    assert_eq!(after.len(), 3);
    assert!(before.iter().all(|key| after.contains(key)));
}

#[test]
fn view_key_changes_with_item_contents() {
    let a = Item::new(1, 0, "data:text/html,a");
    let b = Item::new(1, 0, "data:text/html,b");
    let config = RenderConfig::default();
    assert_eq!(view_key(&a, 0, &config), view_key(&a.clone(), 0, &config));
    assert_ne!(view_key(&a, 0, &config), view_key(&b, 0, &config));
    assert_ne!(view_key(&a, 0, &config), view_key(&a, 1, &config));

    let narrow = RenderConfig { large_table_columns: 2, ..RenderConfig::default() };
    assert_ne!(view_key(&a, 0, &config), view_key(&a, 0, &narrow));
}
