use super::*;

/// Strips punctuation so keywords match regardless of surrounding marks.
///
/// Whitespace is left untouched, so deleting a punctuation character never
/// merges two whitespace-separated words. Leading and trailing whitespace
/// is trimmed from the result.
pub fn normalize(text: &str) -> String {
  re::PUNCTUATION.replace_all(text, "").trim().to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn strips_surrounding_punctuation() {
    assert_eq!(normalize("¡Trump!"), "Trump");
    assert_eq!(normalize("«Mazón»"), "Mazón");
    assert_eq!(normalize("“cita”"), "cita");
  }

  #[test]
  fn strips_straight_quotes() {
    assert_eq!(normalize("\"Trump\""), "Trump");
    assert_eq!(normalize("'Mazón' dice algo"), "Mazón dice algo");
  }

  #[test]
  fn preserves_internal_whitespace() {
    assert_eq!(normalize("foo - bar"), "foo  bar");
    assert_eq!(normalize("hola,  mundo."), "hola  mundo");
  }

  #[test]
  fn trims_leading_and_trailing_whitespace() {
    assert_eq!(normalize("  noticia  "), "noticia");
  }

  #[test]
  fn is_idempotent() {
    for text in ["¡Trump!", "foo - bar", "  hola, mundo.  ", "", "¿qué?"] {
      let once = normalize(text);
      assert_eq!(normalize(&once), once);
    }
  }

  #[test]
  fn handles_empty_input() {
    assert_eq!(normalize(""), "");
  }
}
