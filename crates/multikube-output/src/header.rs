//! Table header detection.

/// Column names that commonly appear in kubectl table headers.
pub const HEADER_KEYWORDS: &[&str] = &[
  "NAME",
  "NAMESPACE",
  "STATUS",
  "READY",
  "AGE",
  "RESTARTS",
  "CLUSTER-IP",
  "EXTERNAL-IP",
  "PORT",
  "NODE",
  "NOMINATED",
  "READINESS",
  "REASON",
  "MESSAGE",
  "TYPE",
  "DATA",
  "CAPACITY",
  "ACCESS",
  "STORAGECLASS",
  "VOLUMEATTRIBUTESCLASS",
  "PROVISIONER",
  "RECLAIMPOLICY",
  "VOLUMEBINDINGMODE",
  "ALLOWVOLUMEEXPANSION",
  "COMPLETIONS",
  "DURATION",
  "SCHEDULE",
  "SUSPEND",
  "ACTIVE",
  "LAST",
  "DESIRED",
  "CURRENT",
  "UP-TO-DATE",
  "AVAILABLE",
  "REFERENCE",
  "TARGETS",
  "MINPODS",
  "MAXPODS",
  "REPLICAS",
];

/// Minimum number of distinct keywords a header line must contain.
pub const HEADER_THRESHOLD: usize = 2;

/// Whether `line` looks like a kubectl table header.
///
/// Counts distinct [`HEADER_KEYWORDS`] found anywhere in the line, ignoring
/// case. This is a substring match, so `NAMESPACE` also counts as `NAME`.
pub fn is_header_line(line: &str) -> bool {
  let upper = line.to_uppercase();
  HEADER_KEYWORDS
    .iter()
    .filter(|keyword| upper.contains(*keyword))
    .count()
    >= HEADER_THRESHOLD
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_common_headers() {
    assert!(is_header_line("NAME      READY   STATUS    RESTARTS   AGE"));
    assert!(is_header_line(
      "NAME         TYPE        CLUSTER-IP   EXTERNAL-IP   PORT(S)   AGE"
    ));
    assert!(is_header_line("NAME     STATUS   ROLES           AGE   VERSION"));
    assert!(is_header_line("NAMESPACE   NAME"));
  }

  #[test]
  fn test_case_insensitive() {
    assert!(is_header_line("name   ready   status"));
  }

  #[test]
  fn test_substring_overlap_counts_twice() {
    // NAMESPACE contains NAME.
    assert!(is_header_line("NAMESPACE"));
  }

  #[test]
  fn test_data_rows_are_not_headers() {
    assert!(!is_header_line("nginx-7c5ddbdf54-x2x9z   1/1     Running   0          3d"));
    assert!(!is_header_line("kube-system"));
    assert!(!is_header_line(""));
  }

  #[test]
  fn test_single_keyword_is_not_enough() {
    assert!(!is_header_line("NAME"));
    assert!(!is_header_line("Client Version: v1.30.0"));
  }
}
