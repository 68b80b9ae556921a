//! End-to-end resolution against real source trees on disk.

use std::fs;
use std::path::Path;

use docnav_toc::{FsTocSource, TocError, resolve_file};
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;

fn write(root: &Path, path: &str, content: &str) {
    let full = root.join(path);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(full, content).unwrap();
}

#[test]
fn test_yaml_toc_with_folder_references() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "intro.md", "# Intro");
    write(root, "sub/topic.md", "# Topic");
    write(root, "sub/toc.md", "#[Topic](topic.md)\n");
    write(
        root,
        "toc.yml",
        "
- name: Topic1
  href: intro.md
  items:
    - name: Topic1.1
      href: intro.md
      homepage: sub/topic.md
    - name: Topic1.2
      href: sub/
      homepage: intro.md
- name: Topic2
  href: sub/
",
    );
    let source = FsTocSource::new(root.to_path_buf());

    let tree = resolve_file("toc.yml", &source).unwrap();

    assert_eq!(
        serde_json::to_value(&tree).unwrap(),
        json!({
            "homepage": "intro.md",
            "items": [
                {
                    "name": "Topic1",
                    "href": "intro.md",
                    "homepage": "sub/topic.md",
                    "items": [
                        {
                            "name": "Topic1.1",
                            "href": "intro.md",
                            "homepage": "sub/topic.md"
                        },
                        {
                            "name": "Topic1.2",
                            "href": "intro.md",
                            "homepage": "intro.md",
                            "tocHref": "sub/toc.md"
                        }
                    ]
                },
                {
                    "name": "Topic2",
                    "href": "sub/topic.md",
                    "tocHref": "sub/toc.md"
                }
            ]
        })
    );
}

#[test]
fn test_outline_toc_inlines_referenced_yaml_toc() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "guide/setup.md", "");
    write(root, "guide/toc.yml", "- name: Setup\n  href: setup.md\n");
    write(
        root,
        "toc.md",
        "# Docs\n## [Guide](guide/toc.yml)\n## [Home](https://example.com)\n",
    );
    let source = FsTocSource::new(root.to_path_buf());

    let tree = resolve_file("toc.md", &source).unwrap();

    assert_eq!(
        serde_json::to_value(&tree).unwrap(),
        json!({
            "homepage": "guide/setup.md",
            "items": [
                {
                    "name": "Docs",
                    "homepage": "guide/setup.md",
                    "items": [
                        {
                            "name": "Guide",
                            "homepage": "guide/setup.md",
                            "items": [{"name": "Setup", "href": "guide/setup.md"}]
                        },
                        {"name": "Home", "href": "https://example.com"}
                    ]
                }
            ]
        })
    );
}

#[test]
fn test_circular_reference_across_notations() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "sub1/toc.yml", "- name: Topic\n  href: toc.md\n");
    write(root, "sub1/toc.md", "#Topic\n##[ReferencedToc](toc.yml)\n");
    write(root, "toc.yml", "- name: Topic1\n  href: sub1/toc.md\n");
    let source = FsTocSource::new(root.to_path_buf());

    let err = resolve_file("toc.yml", &source).unwrap_err();

    assert!(
        matches!(&err, TocError::CircularReference { introduced_by, closed_by }
            if introduced_by == "sub1/toc.yml" && closed_by == "sub1/toc.md"),
        "got {err:?}"
    );
}

#[test]
fn test_missing_toc_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let source = FsTocSource::new(dir.path().to_path_buf());

    let err = resolve_file("toc.yml", &source).unwrap_err();

    assert!(matches!(err, TocError::Io { .. }), "got {err:?}");
}
