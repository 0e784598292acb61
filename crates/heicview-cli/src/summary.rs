use console::Style;
use heicview_core::document::Document;
use heicview_core::session::window_title;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_document_summary(doc: &Document) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to(window_title(Some(&doc.name))));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("File"),
        s.path.apply_to(doc.source.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Dimensions"),
        s.value.apply_to(format!("{}x{}", doc.width(), doc.height()))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Pixels"),
        s.value.apply_to(format!("{:.1} MP", (doc.width() as f64 * doc.height() as f64) / 1e6))
    );
    println!();
}
