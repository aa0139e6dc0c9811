use dirge::{Ancestry, TreeWalker, determine_paths, determine_paths_from_str, parse_line, resolve_parent};
use std::path::{Path, PathBuf};

fn p(parts: &[&str]) -> PathBuf {
    parts.iter().collect()
}

fn token(line: &str) -> Option<(&str, usize)> {
    parse_line(line).map(|t| (t.name, t.depth))
}

#[test]
fn test_parse_line_connectors() {
    assert_eq!(token(" | | +-directory"), Some(("directory", 6)));
    assert_eq!(token("-root"), Some(("root", 0)));
    assert_eq!(token("  +-along"), Some(("along", 3)));
    assert_eq!(token("  |  `-down"), Some(("down", 6)));
    assert_eq!(token("  --name"), Some(("name", 2)));
}
#[test]
fn test_parse_line_only_adjacent_hyphens_are_stripped() {
    assert_eq!(token("-----> folder"), Some(("folder", 7)));
    assert_eq!(token("- -x"), Some(("x", 2)));
}
#[test]
fn test_parse_line_whitespace_counts_toward_depth() {
    assert_eq!(token("        deep-folder"), Some(("deep-folder", 8)));
    assert_eq!(token("\t\tname"), Some(("name", 2)));
    assert_eq!(token("plain"), Some(("plain", 0)));
}
#[test]
fn test_parse_line_name_stops_at_reserved() {
    assert_eq!(token("  +-foo|bar"), Some(("foo", 3)));
    assert_eq!(token("a:b"), Some(("a", 0)));
    assert_eq!(token("x/y"), Some(("x", 0)));
    assert_eq!(token("dir<1>"), Some(("dir", 0)));
    assert_eq!(token("x--y"), Some(("x--y", 0)));
    assert_eq!(token("-name with spaces "), Some(("name with spaces ", 0)));
}
#[test]
fn test_parse_line_name_start_characters() {
    assert_eq!(token("  +-_hidden"), Some(("_hidden", 3)));
    assert_eq!(token("  +-2024"), Some(("2024", 3)));
    assert_eq!(token("  +-répertoire"), Some(("répertoire", 3)));
    assert_eq!(token("-path\r"), Some(("path", 0)));
    assert_eq!(token("-path\n"), Some(("path", 0)));
}
#[test]
fn test_parse_line_absent() {
    for line in ["", "   ", "  |  ", "---", "  +-", " | | `-", "|/\\?:<>", "-> -> ."] {
        assert!(parse_line(line).is_none(), "expected no name in {:?}", line);
    }
}
#[test]
fn test_resolve_parent_scans_backwards() {
    let mut ancestry = Ancestry::new();
    ancestry.push(p(&["a"]), 0);
    ancestry.push(p(&["a", "b"]), 2);
    ancestry.push(p(&["a", "c"]), 2);
    ancestry.push(p(&["a", "c", "d"]), 4);
    assert_eq!(resolve_parent(&ancestry, "e", 6), Some(p(&["a", "c", "d", "e"])));
    assert_eq!(resolve_parent(&ancestry, "f", 4), Some(p(&["a", "c", "f"])));
    assert_eq!(resolve_parent(&ancestry, "g", 2), Some(p(&["a", "g"])));
    assert_eq!(resolve_parent(&ancestry, "h", 0), None);
    assert_eq!(ancestry.len(), 4);
}
#[test]
fn test_resolve_parent_empty_ancestry() {
    let ancestry = Ancestry::new();
    assert!(ancestry.is_empty());
    assert_eq!(resolve_parent(&ancestry, "x", 10), None);
}
#[test]
fn test_resolved_parent_is_strictly_shallower() {
    let text = "-a\n    -b\n  -c\n      -d\n -e\n";
    let mut walker = TreeWalker::new(None);
    for line in text.lines() {
        walker.feed(line);
    }
    let paths = walker.paths().to_vec();
    assert_eq!(
        paths,
        vec![
            p(&["a"]),
            p(&["a", "b"]),
            p(&["a", "c"]),
            p(&["a", "c", "d"]),
            p(&["a", "e"]),
        ]
    );
}
#[test]
fn test_walk_siblings() {
    let paths = determine_paths_from_str("-path\n  +-along\n  `-for\n", None);
    assert_eq!(paths, vec![p(&["path"]), p(&["path", "along"]), p(&["path", "for"])]);
}
#[test]
fn test_walk_nested() {
    let paths = determine_paths_from_str("-path\n  |\n  +-along\n  |  `-down\n", None);
    assert_eq!(
        paths,
        vec![p(&["path"]), p(&["path", "along"]), p(&["path", "along", "down"])]
    );
}
#[test]
fn test_walk_full_template() {
    let text = "

-path
  |
  +-along
  |  |
  |  +-the
  |  |
  |  +-way
  |  |
  |  `-down
  |
  `-for
     |
     `-dirs

";
    let paths = determine_paths_from_str(text, None);
    assert_eq!(
        paths,
        vec![
            p(&["path"]),
            p(&["path", "along"]),
            p(&["path", "along", "down"]),
            p(&["path", "along", "the"]),
            p(&["path", "along", "way"]),
            p(&["path", "for"]),
            p(&["path", "for", "dirs"]),
        ]
    );
}
#[test]
fn test_walk_prefix_only_at_root() {
    let parent = p(&["parent", "dir"]);
    let paths = determine_paths_from_str(
        "-dir_one\n  +-dir_two\n  `-dir_three\n",
        Some(parent.as_path()),
    );
    assert_eq!(
        paths,
        vec![
            parent.join("dir_one"),
            parent.join("dir_one").join("dir_three"),
            parent.join("dir_one").join("dir_two"),
        ]
    );
}
#[test]
fn test_walk_prefix_for_deep_first_line() {
    let parent = Path::new("base");
    let paths = determine_paths_from_str("    -deep\n-top\n  +-child\n", Some(parent));
    assert_eq!(
        paths,
        vec![p(&["base", "deep"]), p(&["base", "top"]), p(&["base", "top", "child"])]
    );
}
#[test]
fn test_walk_decoration_lines_do_not_change_state() {
    let with = determine_paths_from_str("-a\n  |  \n  +-b\n", None);
    let without = determine_paths_from_str("-a\n  +-b\n", None);
    assert_eq!(with, without);
}
#[test]
fn test_walk_keeps_duplicates() {
    let paths = determine_paths_from_str("-a\n  +-b\n-a\n  +-b\n", None);
    assert_eq!(paths, vec![p(&["a"]), p(&["a"]), p(&["a", "b"]), p(&["a", "b"])]);
}
#[test]
fn test_walk_sorts_by_string_not_components() {
    let paths = determine_paths_from_str("-a\n  +-c\n-a-b\n", None);
    assert_eq!(paths, vec![p(&["a"]), p(&["a-b"]), p(&["a", "c"])]);
}
#[test]
fn test_walk_one_path_per_named_line() {
    let lines = vec!["-x", "", "  +-y", "  |", "  +-z", "    `-w", "---"];
    let paths = determine_paths(lines.iter(), None);
    assert_eq!(paths.len(), 4);
    assert!(paths.windows(2).all(|w| w[0].as_os_str() <= w[1].as_os_str()));
}
