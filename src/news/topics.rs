use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// The closed vocabulary of news categories the feed classifies articles
/// into.
///
/// Every [`NewsRecord`](crate::news::NewsRecord) reports a relevance score
/// for all of these, so the normalized table has a uniform shape no matter
/// which topics an article actually touched. Topic names outside this set
/// are dropped during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Blockchain,
    Earnings,
    Ipo,
    MergersAndAcquisitions,
    FinancialMarkets,
    EconomyFiscal,
    EconomyMonetary,
    EconomyMacro,
    EnergyTransportation,
    Finance,
    LifeSciences,
    Manufacturing,
    RealEstateConstruction,
    RetailWholesale,
    Technology,
}

impl Topic {
    /// Number of supported topics.
    pub const COUNT: usize = 15;

    /// All topics in vocabulary order (the column order of the output table).
    pub const ALL: [Topic; Topic::COUNT] = [
        Topic::Blockchain,
        Topic::Earnings,
        Topic::Ipo,
        Topic::MergersAndAcquisitions,
        Topic::FinancialMarkets,
        Topic::EconomyFiscal,
        Topic::EconomyMonetary,
        Topic::EconomyMacro,
        Topic::EnergyTransportation,
        Topic::Finance,
        Topic::LifeSciences,
        Topic::Manufacturing,
        Topic::RealEstateConstruction,
        Topic::RetailWholesale,
        Topic::Technology,
    ];

    /// The topic name exactly as the feed spells it.
    pub const fn as_str(self) -> &'static str {
        match self {
            Topic::Blockchain => "Blockchain",
            Topic::Earnings => "Earnings",
            Topic::Ipo => "IPO",
            Topic::MergersAndAcquisitions => "Mergers & Acquisitions",
            Topic::FinancialMarkets => "Financial Markets",
            Topic::EconomyFiscal => "Economy - Fiscal Policy",
            Topic::EconomyMonetary => "Economy - Monetary",
            Topic::EconomyMacro => "Economy - Macro",
            Topic::EnergyTransportation => "Energy & Transportation",
            Topic::Finance => "Finance",
            Topic::LifeSciences => "Life Sciences",
            Topic::Manufacturing => "Manufacturing",
            Topic::RealEstateConstruction => "Real Estate & Construction",
            Topic::RetailWholesale => "Retail & Wholesale",
            Topic::Technology => "Technology",
        }
    }

    /// Parse a feed topic name. Unknown names yield `None` and are ignored
    /// by the normalizer.
    pub(crate) fn from_feed_name(name: &str) -> Option<Topic> {
        Topic::ALL.iter().copied().find(|t| t.as_str() == name)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl Serialize for Topic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Total mapping from [`Topic`] to the article's relevance score for it.
///
/// Topics the article did not touch score exactly `0.00`. Serializes as one
/// column per topic, keyed by the feed's topic names, in vocabulary order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopicScores([f64; Topic::COUNT]);

impl TopicScores {
    /// The relevance score for `topic`.
    pub const fn get(&self, topic: Topic) -> f64 {
        self.0[topic.index()]
    }

    pub(crate) fn set(&mut self, topic: Topic, score: f64) {
        self.0[topic.index()] = score;
    }

    /// All `(topic, score)` pairs in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = (Topic, f64)> + '_ {
        Topic::ALL.iter().map(|&t| (t, self.get(t)))
    }
}

impl Default for TopicScores {
    fn default() -> Self {
        Self([0.0; Topic::COUNT])
    }
}

impl Serialize for TopicScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Topic::COUNT))?;
        for (topic, score) in self.iter() {
            map.serialize_entry(topic.as_str(), &score)?;
        }
        map.end()
    }
}
