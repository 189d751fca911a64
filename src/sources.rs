use crate::config::SourceConfig;

/// A named publisher exposing an RSS/Atom feed URL.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSource {
    pub name: String,
    pub url: String,
    pub homepage: String,
}

impl FeedSource {
    pub fn new(name: &str, url: &str, homepage: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            homepage: homepage.to_string(),
        }
    }
}

/// Immutable registry of feed sources, built once at startup.
#[derive(Debug, Clone)]
pub struct SourceRegistry {
    sources: Vec<FeedSource>,
}

impl SourceRegistry {
    pub fn new(sources: Vec<FeedSource>) -> Self {
        Self { sources }
    }

    /// Build from configured sources, or fall back to the curated default
    /// list when the configuration names none.
    pub fn from_config(configs: &[SourceConfig]) -> Self {
        if configs.is_empty() {
            return Self::curated();
        }
        let sources = configs
            .iter()
            .map(|c| FeedSource {
                name: c.name.clone(),
                url: c.url.clone(),
                homepage: c.homepage.clone().unwrap_or_else(|| c.url.clone()),
            })
            .collect();
        Self { sources }
    }

    /// Built-in publisher list used when no sources are configured.
    pub fn curated() -> Self {
        let sources = vec![
            FeedSource::new(
                "BBC News",
                "https://feeds.bbci.co.uk/news/rss.xml",
                "https://bbc.com",
            ),
            FeedSource::new(
                "BBC World",
                "https://feeds.bbci.co.uk/news/world/rss.xml",
                "https://bbc.com",
            ),
            FeedSource::new(
                "NPR News",
                "https://feeds.npr.org/1001/rss.xml",
                "https://npr.org",
            ),
            FeedSource::new(
                "NPR Politics",
                "https://feeds.npr.org/1014/rss.xml",
                "https://npr.org",
            ),
            FeedSource::new(
                "The Guardian",
                "https://www.theguardian.com/world/rss",
                "https://theguardian.com",
            ),
            FeedSource::new(
                "Guardian US",
                "https://www.theguardian.com/us-news/rss",
                "https://theguardian.com",
            ),
            FeedSource::new(
                "CBS News",
                "https://www.cbsnews.com/latest/rss/main",
                "https://cbsnews.com",
            ),
            FeedSource::new(
                "ABC News",
                "https://abcnews.go.com/abcnews/topstories",
                "https://abcnews.go.com",
            ),
            FeedSource::new(
                "CNBC Top News",
                "https://search.cnbc.com/rs/search/combinedcms/view.xml?partnerId=wrss01&id=100003114",
                "https://cnbc.com",
            ),
            FeedSource::new(
                "Politico",
                "https://www.politico.com/rss/politicopicks.xml",
                "https://politico.com",
            ),
            FeedSource::new(
                "The Hill",
                "https://thehill.com/feed/",
                "https://thehill.com",
            ),
            FeedSource::new(
                "Axios",
                "https://api.axios.com/feed/",
                "https://axios.com",
            ),
            FeedSource::new(
                "AP News",
                "https://feedx.net/rss/ap.xml",
                "https://apnews.com",
            ),
            FeedSource::new(
                "Al Jazeera",
                "https://www.aljazeera.com/xml/rss/all.xml",
                "https://aljazeera.com",
            ),
            FeedSource::new(
                "Deutsche Welle",
                "https://rss.dw.com/rdf/rss-en-all",
                "https://dw.com",
            ),
            FeedSource::new(
                "France 24",
                "https://www.france24.com/en/rss",
                "https://france24.com",
            ),
            FeedSource::new(
                "Sky News",
                "https://feeds.skynews.com/feeds/rss/home.xml",
                "https://news.sky.com",
            ),
            FeedSource::new(
                "The Verge",
                "https://www.theverge.com/rss/index.xml",
                "https://theverge.com",
            ),
            FeedSource::new(
                "Ars Technica",
                "https://feeds.arstechnica.com/arstechnica/index",
                "https://arstechnica.com",
            ),
            FeedSource::new(
                "TechCrunch",
                "https://techcrunch.com/feed/",
                "https://techcrunch.com",
            ),
            FeedSource::new(
                "Wired",
                "https://www.wired.com/feed/rss",
                "https://wired.com",
            ),
            FeedSource::new(
                "Engadget",
                "https://www.engadget.com/rss.xml",
                "https://engadget.com",
            ),
            FeedSource::new(
                "MIT Technology Review",
                "https://www.technologyreview.com/feed/",
                "https://technologyreview.com",
            ),
            FeedSource::new(
                "Hacker News",
                "https://news.ycombinator.com/rss",
                "https://news.ycombinator.com",
            ),
            FeedSource::new(
                "Reuters Institute",
                "https://reutersinstitute.politics.ox.ac.uk/rss.xml",
                "https://reutersinstitute.politics.ox.ac.uk",
            ),
            FeedSource::new(
                "ESPN",
                "https://www.espn.com/espn/rss/news",
                "https://espn.com",
            ),
        ];
        Self { sources }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeedSource> {
        self.sources.iter()
    }

    pub fn get(&self, name: &str) -> Option<&FeedSource> {
        self.sources.iter().find(|s| s.name == name)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
