/// Somewhere cluster contexts can be listed from.
pub trait TargetSource: Send + Sync {
  /// Every known context, in source order.
  fn targets(&self) -> Vec<String>;

  /// The requested contexts that this source knows about.
  ///
  /// Unknown names are dropped, duplicates keep their first position and the
  /// requested order is preserved. An empty request returns every context.
  fn filter_targets(&self, requested: &[String]) -> Vec<String> {
    let known = self.targets();
    if requested.is_empty() {
      return known;
    }

    let mut filtered: Vec<String> = Vec::with_capacity(requested.len());
    for name in requested {
      if known.contains(name) && !filtered.contains(name) {
        filtered.push(name.clone());
      }
    }
    filtered
  }
}
