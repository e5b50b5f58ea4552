use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductFilter {
    #[default]
    All,
    ProductA,
    ProductB,
    ProductC,
}

impl ProductFilter {
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Products",
            Self::ProductA => "Product A",
            Self::ProductB => "Product B",
            Self::ProductC => "Product C",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionFilter {
    #[default]
    All,
    NorthAmerica,
    Europe,
    AsiaPacific,
    LatinAmerica,
}

impl RegionFilter {
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Regions",
            Self::NorthAmerica => "North America",
            Self::Europe => "Europe",
            Self::AsiaPacific => "Asia Pacific",
            Self::LatinAmerica => "Latin America",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChannelFilter {
    #[default]
    All,
    Direct,
    Online,
    Partner,
    Reseller,
}

impl ChannelFilter {
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Channels",
            Self::Direct => "Direct Sales",
            Self::Online => "Online",
            Self::Partner => "Partner",
            Self::Reseller => "Reseller",
        }
    }
}

/// Calendar selection; either end may be unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Filter bar selection.
///
/// The mock data ignores these values; a change only triggers regeneration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub date_range: DateRange,
    pub product: ProductFilter,
    pub region: RegionFilter,
    pub channel: ChannelFilter,
}

impl FilterState {
    /// True when anything differs from the "all" selection. Only the start of
    /// the date range counts, since a range cannot end without starting.
    pub fn has_active_filters(&self) -> bool {
        self.product != ProductFilter::All
            || self.region != RegionFilter::All
            || self.channel != ChannelFilter::All
            || self.date_range.from.is_some()
    }
}
