use super::*;

/// A compiled, session-immutable set of keywords.
///
/// Each keyword is normalized, escaped so regex metacharacters match
/// literally, and compiled into a case-insensitive whole-word pattern:
/// the keyword must be bounded on each side by whitespace or a string
/// edge, so "Trump" matches "Trump says X" and "¡Trump!" but never
/// "trumpets" or "Trumpism".
pub struct KeywordSet {
  patterns: Vec<Regex>,
}

impl KeywordSet {
  pub fn new(keywords: &[String]) -> Result<Self> {
    let mut patterns = Vec::with_capacity(keywords.len());

    for keyword in keywords {
      let normalized = normalize(keyword);

      if normalized.is_empty() {
        debug!("skipping keyword with no matchable text: {keyword:?}");
        continue;
      }

      let escaped = regex::escape(&normalized);

      patterns.push(Regex::new(&format!(r"(?i)(^|\s){escaped}(\s|$)"))?);
    }

    Ok(Self { patterns })
  }

  /// Returns true if any keyword appears in `text` as a standalone
  /// word or phrase. An empty keyword set matches nothing.
  pub fn is_match(&self, text: &str) -> bool {
    if self.patterns.is_empty() {
      return false;
    }

    let normalized = normalize(text);

    self
      .patterns
      .iter()
      .any(|pattern| pattern.is_match(&normalized))
  }
}
