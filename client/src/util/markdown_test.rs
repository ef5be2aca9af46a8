use super::*;

#[test]
fn renders_headings_and_tables() {
    let html = render_markdown_html("# Plans\n\n| Tier | Songs |\n|---|---|\n| Pro | 500 |\n");
    assert!(html.contains("<h1>Plans</h1>"));
    assert!(html.contains("<table>"));
    assert!(html.contains("<td>500</td>"));
}

#[test]
fn strips_raw_html() {
    let html = render_markdown_html("hello <script>alert(1)</script>\n\n<div>block</div>\n");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<div>"));
    assert!(html.contains("hello"));
}

#[test]
fn first_heading_skips_lower_levels() {
    assert_eq!(first_heading("## Intro\n# Terms of Service\n"), Some("Terms of Service"));
    assert_eq!(first_heading("no heading here"), None);
    assert_eq!(first_heading("#   \n"), None);
}
