use super::*;
use crate::test_support::{assert_in_order, count};

fn render_document() -> String {
    let options = LeptosOptions::builder().output_name("photofeed").build();
    Owner::new().with(|| {
        provide_meta_context();
        page_document(options, || view! { <p>"feed"</p> }).to_html()
    })
}

#[test]
fn document_has_exactly_one_mount_point() {
    let html = render_document();
    assert_eq!(count(&html, &format!("id=\"{MOUNT_ID}\"")), 1);
    assert_eq!(MOUNT_ID, "root");
}

#[test]
fn app_renders_inside_mount_point() {
    let html = render_document();
    assert_in_order(&html, &["<body", "id=\"root\"", "<p>feed</p>", "</body>"]);
}

#[test]
fn global_styles_are_emitted_once_in_head() {
    let html = render_document();
    assert_eq!(count(&html, "id=\"global-styles\""), 1);
    assert!(html.contains("scrollbar-width: none;"));
    assert_in_order(&html, &["<head", "id=\"global-styles\"", "</head>", "<body"]);
}

#[test]
fn document_loads_the_hydration_bundle() {
    let html = render_document();
    assert!(html.contains("photofeed"));
}
