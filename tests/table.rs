//! Public surface of the table library, exercised end to end.

use ratatui::{buffer::Buffer, layout::Rect, widgets::StatefulWidget};
use tabula::core::{
    table_classes, Accessor, BodyRow, ExpansionState, FixedColumns, Record, Table, TableClass,
    TableColumn, TableSize,
};
use tabula::ui::{TableHit, TableWidget, TableWidgetState};

struct Person {
    id: &'static str,
    name: &'static str,
}

impl Record for Person {
    fn field(&self, name: &str) -> Option<String> {
        match name {
            "id" => Some(self.id.to_string()),
            "name" => Some(self.name.to_string()),
            _ => None,
        }
    }
}

fn people() -> Vec<Person> {
    vec![
        Person { id: "a", name: "Alice" },
        Person { id: "b", name: "Bob" },
    ]
}

fn key(p: &Person, _: usize) -> String {
    p.id.to_string()
}

fn contents(row: &BodyRow) -> Vec<&str> {
    match row {
        BodyRow::Data { cells, .. } => cells.iter().map(|c| c.content.as_str()).collect(),
        BodyRow::Expansion { content, .. } => vec![content.as_str()],
    }
}

fn screen_text(buf: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn name_column_renders_rows_in_order() {
    let rows = people();
    let columns = vec![TableColumn::field("Name", "name")];
    let view = Table::new(&rows, &columns, key).build(&ExpansionState::new());

    assert_eq!(view.header.len(), 1);
    assert_eq!(view.header[0].title, "Name");
    assert_eq!(view.body.len(), 2);
    assert_eq!(contents(&view.body[0]), ["Alice"]);
    assert_eq!(contents(&view.body[1]), ["Bob"]);
    assert_eq!(view.body[0].key(), "a");
    assert_eq!(view.body[1].key(), "b");
}

#[test]
fn field_and_computed_accessors() {
    let alice = Person { id: "a", name: "Alice" };
    assert_eq!(Accessor::field("name").resolve(&alice, 0), "Alice");
    assert_eq!(Accessor::field("missing").resolve(&alice, 0), "");

    let numbered = Accessor::computed(|p: &Person, i| format!("{}. {}", i + 1, p.name));
    assert_eq!(numbered.resolve(&alice, 4), "5. Alice");
}

#[test]
fn body_grows_by_one_row_per_expanded_key() {
    let rows = people();
    let columns = vec![TableColumn::field("Name", "name")];
    let table = Table::new(&rows, &columns, key).expand_row_render(|p: &Person| format!("{} details", p.name));

    let mut expansion = ExpansionState::new();
    assert_eq!(table.build(&expansion).body.len(), 2);

    assert!(expansion.toggle("b"));
    let view = table.build(&expansion);
    assert_eq!(view.body.len(), 3);
    assert!(matches!(&view.body[2], BodyRow::Expansion { key, content, .. } if key == "b" && content == "Bob details"));

    expansion.toggle("a");
    assert_eq!(table.build(&expansion).body.len(), 4);
}

#[test]
fn expanded_keys_are_ignored_without_a_renderer() {
    let rows = people();
    let columns = vec![TableColumn::field("Name", "name")];
    let table = Table::new(&rows, &columns, key);

    let mut expansion = ExpansionState::new();
    expansion.set("a", true);
    let view = table.build(&expansion);
    assert!(!view.expandable);
    assert_eq!(view.body.len(), 2);
    assert!(view.body.iter().all(BodyRow::is_data));
}

#[test]
fn double_toggle_restores_state() {
    let mut expansion = ExpansionState::new();
    expansion.set("x", true);
    let before = expansion.clone();

    expansion.toggle("y");
    expansion.toggle("y");
    assert_eq!(expansion, before);

    expansion.toggle("x");
    expansion.toggle("x");
    assert_eq!(expansion, before);
    assert_eq!(expansion.keys().collect::<Vec<_>>(), ["x"]);
}

#[test]
fn fixed_flags_map_to_layout_classes() {
    let both = table_classes(FixedColumns::FIRST | FixedColumns::LAST, false, TableSize::Medium);
    assert!(both.contains(&TableClass::FixedFirstColumn));
    assert!(both.contains(&TableClass::FixedLastColumn));
    assert!(both.contains(&TableClass::FixedContainer));

    let none = table_classes(FixedColumns::NONE, false, TableSize::Medium);
    assert!(!none.contains(&TableClass::FixedFirstColumn));
    assert!(!none.contains(&TableClass::FixedLastColumn));
    assert!(!none.contains(&TableClass::FixedContainer));
}

#[test]
fn every_size_preset_is_a_cell_class() {
    for &size in TableSize::ALL {
        let classes = table_classes(FixedColumns::NONE, true, size);
        assert!(classes.contains(&TableClass::Cell(size)));
        assert!(classes.contains(&TableClass::ContainerFill));
    }
}

#[test]
fn widget_draws_and_hit_tests_an_expanded_row() {
    let rows = people();
    let columns = vec![TableColumn::field("Id", "id"), TableColumn::field("Name", "name")];
    let table = Table::new(&rows, &columns, key).expand_row_render(|p: &Person| format!("hi {}", p.name));

    let mut state = TableWidgetState::default();
    assert_eq!(state.toggle_row(&table, 0), Some(("a".to_string(), true)));
    let view = table.build(&state.expansion);

    let area = Rect::new(0, 0, 30, 6);
    let mut buf = Buffer::empty(area);
    TableWidget::new(&view).render(area, &mut buf, &mut state);

    let text = screen_text(&buf);
    assert!(text.contains("Name"));
    assert!(text.contains("Alice"));
    assert!(text.contains("hi Alice"));
    assert!(text.contains("Bob"));
    assert!(text.contains('▼'));
    assert!(text.contains('▶'));

    // Header, separator, Alice, her detail, Bob.
    let widget = TableWidget::new(&view);
    assert_eq!(widget.hit_test(area, &state, 5, 0), Some(TableHit::Header));
    assert_eq!(widget.hit_test(area, &state, 5, 2), Some(TableHit::Row(0)));
    assert_eq!(widget.hit_test(area, &state, 5, 3), Some(TableHit::Expansion(0)));
    assert_eq!(widget.hit_test(area, &state, 5, 4), Some(TableHit::Row(1)));
}
