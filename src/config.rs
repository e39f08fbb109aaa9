use super::*;

/// How to locate items and their text within one site's markup.
///
/// Each field is a CSS selector. `item` matches the container of a single
/// article, `headline` and `description` match text-bearing descendants
/// within that container.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Descriptor {
  pub item: String,
  pub headline: String,
  #[serde(default)]
  pub description: Option<String>,
}

impl Descriptor {
  pub fn new(item: impl Into<String>, headline: impl Into<String>) -> Self {
    Self {
      item: item.into(),
      headline: headline.into(),
      description: None,
    }
  }

  #[must_use]
  pub fn with_description(mut self, description: impl Into<String>) -> Self {
    self.description = Some(description.into());
    self
  }
}

/// Maps bare domains to structural descriptors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct SiteTable {
  sites: HashMap<String, Descriptor>,
}

impl SiteTable {
  pub fn new(sites: HashMap<String, Descriptor>) -> Self {
    Self { sites }
  }

  /// Looks up the descriptor for a hostname, ignoring a leading `www.`.
  /// `None` means the site is unsupported and filtering stays inactive.
  pub fn resolve(&self, hostname: &str) -> Option<&Descriptor> {
    let domain = hostname.strip_prefix("www.").unwrap_or(hostname);

    self.sites.get(domain)
  }

  /// Descriptor data for the supported Spanish news sites.
  pub fn builtin() -> Self {
    let mut sites = HashMap::new();

    let mut site =
      |domain: &str, item: &str, headline: &str, description: &str| {
        sites.insert(
          domain.to_string(),
          Descriptor::new(item, headline).with_description(description),
        );
      };

    site(
      "abc.es",
      "article, div.noticia, div.voc-noticia, div[data-noticia], \
       section article",
      "h2 a, h3 a, h2.titular a, h3.titular a, a.titular-link, \
       a[href*=\"/noticias/\"]",
      "p.sumario, p.entradilla, p.descripcion, div.bajada",
    );

    site(
      "elmundo.es",
      "article, div.ue-c-cover-content, div.ue-l-article, \
       div[data-vr-zone], section.ue-c-cover-grid__main article",
      "h2 a, h3 a, h2.ue-c-cover-content__headline a, \
       h3.ue-c-cover-content__headline a, a.ue-c-cover-content__link",
      "p.ue-c-cover-content__standfirst, p.ue-c-cover-content__summary, \
       div.ue-c-cover-content__byline-and-standfirst",
    );

    site(
      "elpais.com",
      "article.c",
      "h2.c_t a, h3.c_t a",
      "p.c_d",
    );

    site(
      "lavanguardia.com",
      "article",
      "h2, h3, h4, .headline, .title",
      "p, .summary, .lead",
    );

    site(
      "larazon.es",
      "article, .noticia",
      "h2, h3, .title",
      "p, .lead",
    );

    site(
      "meneame.net",
      "article.story, div.news-summary, ul.news-summary li",
      "h2 a, h3 a, .story-title a, .news-summary .news-content a, \
       [data-title]",
      ".story-content, .news-details, .news-body",
    );

    site(
      "marca.com",
      "article, .principal",
      "h2, h3, .title",
      "p, .summary",
    );

    site(
      "as.com",
      "article, .principal",
      "h2, h3, .title",
      "p, .summary",
    );

    Self { sites }
  }
}

/// The full operator-supplied configuration: the keyword list and the
/// site table. Immutable for the lifetime of a session.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
  #[serde(default)]
  pub keywords: Vec<String>,
  #[serde(default = "SiteTable::builtin")]
  pub sites: SiteTable,
}

impl FilterConfig {
  pub fn new(keywords: Vec<String>, sites: SiteTable) -> Self {
    Self { keywords, sites }
  }

  pub fn from_json(json: &str) -> Result<Self> {
    Ok(serde_json::from_str(json)?)
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  fn table() -> SiteTable {
    SiteTable::new(HashMap::from([(
      "elpais.com".to_string(),
      Descriptor::new("article.c", "h2.c_t a").with_description("p.c_d"),
    )]))
  }

  #[test]
  fn resolve_strips_www_prefix() {
    let table = table();

    assert_eq!(
      table.resolve("www.elpais.com"),
      table.resolve("elpais.com")
    );
    assert!(table.resolve("elpais.com").is_some());
  }

  #[test]
  fn resolve_returns_none_for_unknown_domain() {
    assert_eq!(table().resolve("unknown.tld"), None);
  }

  #[test]
  fn resolve_strips_only_one_prefix() {
    assert_eq!(table().resolve("www.www.elpais.com"), None);
  }

  #[test]
  fn builtin_resolves_all_shipped_domains() {
    let table = SiteTable::builtin();

    for domain in [
      "abc.es",
      "elmundo.es",
      "elpais.com",
      "lavanguardia.com",
      "larazon.es",
      "meneame.net",
      "marca.com",
      "as.com",
    ] {
      assert!(table.resolve(domain).is_some(), "missing {domain}");
      assert!(
        table.resolve(&format!("www.{domain}")).is_some(),
        "missing www.{domain}"
      );
    }
  }

  #[test]
  fn config_parses_from_json() {
    let config = FilterConfig::from_json(
      r#"{
        "keywords": ["Trump", "Mazón"],
        "sites": {
          "example.com": { "item": ".story", "headline": "h2" }
        }
      }"#,
    )
    .unwrap();

    assert_eq!(config.keywords, vec!["Trump", "Mazón"]);

    let descriptor = config.sites.resolve("example.com").unwrap();

    assert_eq!(descriptor.headline, "h2");
    assert_eq!(descriptor.description, None);
  }

  #[test]
  fn config_defaults_to_builtin_sites() {
    let config = FilterConfig::from_json(r#"{ "keywords": [] }"#).unwrap();

    assert!(config.keywords.is_empty());
    assert!(config.sites.resolve("elpais.com").is_some());
  }

  #[test]
  fn malformed_json_is_a_config_error() {
    assert!(matches!(
      FilterConfig::from_json("not json"),
      Err(Error::InvalidConfig { .. })
    ));
  }
}
