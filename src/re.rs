use super::*;

pub(crate) static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#"[.,/#!$%^&*;:{}=\-_`~()¿?¡!"“”'‘’«»]"#).unwrap()
});
