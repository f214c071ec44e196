//! Per-file inclusion decisions.

use std::fs;

use crate::config::{RuleSet, SizeCap};
use crate::domain::{Decision, DumpFile, SkippedFile};
use crate::utils::{basename, extension};

/// Decide whether `path` belongs in the dump.
///
/// Rules apply in priority order; the first match wins:
/// 1. disallowed basename (exact or lowercase)
/// 2. disallowed extension, unless the basename is explicitly allowed
/// 3. the allowed-extension list, unless the basename is explicitly allowed
/// 4. the size cap (the only rule that touches the filesystem)
///
/// A stat failure excludes just this file; the run continues.
pub fn decide(path: &str, rules: &RuleSet, cap: SizeCap) -> Decision {
    let name = basename(path);
    let name_lower = name.to_lowercase();
    let ext = extension(&name_lower);

    if rules.is_disallowed_basename(name, &name_lower) {
        return Decision::Skip { reason: "disallowed basename".to_string() };
    }

    let explicitly_allowed = rules.is_allowed_basename(name, &name_lower);

    if !explicitly_allowed && !ext.is_empty() && rules.is_disallowed_extension(ext) {
        return Decision::Skip { reason: format!("disallowed extension .{ext}") };
    }

    if !explicitly_allowed
        && rules.has_allowed_extensions()
        && (ext.is_empty() || !rules.is_allowed_extension(ext))
    {
        return Decision::Skip { reason: "not in allowed extensions".to_string() };
    }

    let size = match fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(err) => return Decision::Skip { reason: format!("stat error: {err}") },
    };

    if size > cap.bytes() {
        return Decision::Skip {
            reason: format!(
                "exceeds size limit ({:.1}KB > {}KB)",
                size as f64 / 1024.0,
                cap.kb
            ),
        };
    }

    Decision::Include { size }
}

/// Run every listed path through [`decide`], splitting the listing into the
/// files to dump and the files to report as skipped.
pub fn partition(
    paths: &[String],
    rules: &RuleSet,
    cap: SizeCap,
) -> (Vec<DumpFile>, Vec<SkippedFile>) {
    let mut included = Vec::new();
    let mut skipped = Vec::new();
    for path in paths {
        match decide(path, rules, cap) {
            Decision::Include { size } => {
                included.push(DumpFile { path: path.clone(), size });
            }
            Decision::Skip { reason } => {
                tracing::debug!(path = %path, reason = %reason, "excluded from dump");
                skipped.push(SkippedFile { path: path.clone(), reason });
            }
        }
    }
    (included, skipped)
}

#[cfg(test)]
mod tests {
    use super::{decide, partition};
    use crate::config::{RuleSet, SizeCap};
    use crate::domain::Decision;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, bytes: usize) -> String {
        let path = dir.path().join(name);
        fs::write(&path, vec![b'x'; bytes]).expect("write fixture");
        path.to_str().expect("utf8 path").to_string()
    }

    #[test]
    fn disallowed_basename_wins_over_every_other_rule() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_file(&dir, "yarn.lock", 10);
        // basename is both explicitly allowed and disallowed, and carries an
        // allowed extension; the disallow still wins
        let rules = RuleSet::from_lists("lock", "", "yarn.lock", "yarn.lock");
        assert_eq!(
            decide(&path, &rules, SizeCap::default()),
            Decision::Skip { reason: "disallowed basename".to_string() }
        );
    }

    #[test]
    fn explicitly_allowed_basename_bypasses_extension_rules() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_file(&dir, "Dockerfile.dev", 10);
        let rules = RuleSet::from_lists("md", "dev", "", "Dockerfile.dev");
        assert!(matches!(
            decide(&path, &rules, SizeCap::default()),
            Decision::Include { size: 10 }
        ));
    }

    #[test]
    fn extension_matching_is_case_insensitive() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_file(&dir, "notes.MD", 10);
        let rules = RuleSet::from_lists("md", "", "", "");
        assert!(matches!(decide(&path, &rules, SizeCap::default()), Decision::Include { .. }));
    }

    #[test]
    fn disallowed_extension_is_reported_with_the_extension() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_file(&dir, "bundle.min.js", 10);
        let rules = RuleSet::from_lists("js/ts", "js", "", "");
        assert_eq!(
            decide(&path, &rules, SizeCap::default()),
            Decision::Skip { reason: "disallowed extension .js".to_string() }
        );
    }

    #[test]
    fn missing_extension_fails_the_allowed_list() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_file(&dir, "LICENSE", 10);
        let rules = RuleSet::from_lists("md", "", "", "");
        assert_eq!(
            decide(&path, &rules, SizeCap::default()),
            Decision::Skip { reason: "not in allowed extensions".to_string() }
        );
    }

    #[test]
    fn empty_allowed_list_admits_any_extension() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_file(&dir, "data.xyz", 10);
        let rules = RuleSet::from_lists("", "", "", "");
        assert!(matches!(decide(&path, &rules, SizeCap::default()), Decision::Include { .. }));
    }

    #[test]
    fn size_cap_boundary_is_inclusive() {
        let dir = TempDir::new().expect("temp dir");
        let at_cap = write_file(&dir, "exact.md", 1024);
        let over_cap = write_file(&dir, "over.md", 1025);
        let rules = RuleSet::from_lists("md", "", "", "");
        let cap = SizeCap { kb: 1.0 };

        assert_eq!(decide(&at_cap, &rules, cap), Decision::Include { size: 1024 });

        match decide(&over_cap, &rules, cap) {
            Decision::Skip { reason } => {
                assert!(reason.contains("1.0KB"), "actual size missing: {reason}");
                assert!(reason.contains("> 1KB"), "limit missing: {reason}");
            }
            other => panic!("expected size skip, got {other:?}"),
        }
    }

    #[test]
    fn stat_failure_is_a_per_file_skip() {
        let rules = RuleSet::from_lists("md", "", "", "");
        match decide("/nonexistent/never.md", &rules, SizeCap::default()) {
            Decision::Skip { reason } => assert!(reason.starts_with("stat error:")),
            other => panic!("expected skip, got {other:?}"),
        }
    }

    #[test]
    fn decide_is_deterministic() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_file(&dir, "main.rs", 42);
        let rules = RuleSet::defaults();
        let first = decide(&path, &rules, SizeCap::default());
        let second = decide(&path, &rules, SizeCap::default());
        assert_eq!(first, second);
    }

    #[test]
    fn partition_splits_and_preserves_reasons() {
        let dir = TempDir::new().expect("temp dir");
        let keep = write_file(&dir, "a.md", 5);
        let drop = write_file(&dir, "yarn.lock", 5);
        let rules = RuleSet::defaults();

        let (included, skipped) =
            partition(&[keep.clone(), drop.clone()], &rules, SizeCap::default());
        assert_eq!(included.len(), 1);
        assert_eq!(included[0].path, keep);
        assert_eq!(included[0].size, 5);
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].path, drop);
        assert_eq!(skipped[0].reason, "disallowed basename");
    }
}
