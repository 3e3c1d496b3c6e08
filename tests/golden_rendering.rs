use std::fs;
use std::path::PathBuf;

use folio::rendering::{digest_hex, render_page, RenderedPage, ViewState};
use folio::{Content, PageConfig};
use pretty_assertions::assert_eq;

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

fn read_golden(name: &str) -> String {
    let path = golden_path(name);
    match fs::read_to_string(&path) {
        Ok(s) => s.trim_end().to_string(),
        Err(e) => panic!("missing golden {:?} ({}); run with UPDATE_GOLDENS=1 to create it", path, e),
    }
}

/// Compare the page markup first so a mismatch shows a readable diff, then
/// the digest that pins it.
fn check_golden(name: &str, page: &RenderedPage) {
    let html_name = format!("{}.html", name);
    let digest_name = format!("{}.sha256", name);
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(golden_path(&html_name), format!("{}\n", page.html)).expect("write golden");
        fs::write(golden_path(&digest_name), format!("{}\n", page.digest)).expect("write golden");
        println!("Updated golden: {:?}", golden_path(&digest_name));
        return;
    }

    let html = read_golden(&html_name);
    let digest = read_golden(&digest_name);
    assert_eq!(digest_hex(&html), digest, "{} does not hash to {}", html_name, digest_name);
    assert_eq!(page.html, html);
    assert_eq!(page.digest, digest);
}

#[test]
fn golden_builtin_page_digest() {
    let page = render_page(&PageConfig::default(), Content::builtin(), ViewState::default()).expect("render");
    check_golden("builtin", &page);
}

#[test]
fn golden_fixture_page_digest_scrolled() {
    let content = Content::from_path("tests/fixtures/content.json").expect("fixture");
    let config = PageConfig {
        embed_scroll_script: false,
        ..Default::default()
    };
    let page = render_page(&config, &content, ViewState::at_offset(250.0)).expect("render");
    check_golden("fixture_scrolled", &page);
}
