//! Built-in field dictionary for exchange stream messages
//!
//! Keys are short and reused across containers (`id` is a market id under `mc`, a
//! selection id under `rc` and a bet id under `uo`), so each container has its own
//! table. The table matching the lookup context is consulted first, then every table
//! in a fixed fallback order.

use super::{fallback_metadata, DictionaryListing, DictionarySection, FieldMetadataLookup};
use crate::types::{CategoryDescriptor, ContextTag, FieldMetadata};
use std::collections::BTreeMap;

/// One static dictionary row
#[derive(Debug, Clone, Copy)]
struct FieldDef {
    key: &'static str,
    name: &'static str,
    description: &'static str,
    category: &'static str,
}

impl FieldDef {
    const fn new(
        key: &'static str,
        name: &'static str,
        description: &'static str,
        category: &'static str,
    ) -> Self {
        Self {
            key,
            name,
            description,
            category,
        }
    }

    fn to_metadata(self) -> FieldMetadata {
        FieldMetadata {
            name: self.name.to_string(),
            description: self.description.to_string(),
            category: self.category.to_string(),
            ml_relevance: relevance_for_category(self.category).to_string(),
        }
    }
}

/// Per-container field tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldTable {
    TopLevel,
    MarketChange,
    MarketDefinition,
    RunnerDefinition,
    RunnerChange,
    OrderChange,
    OrderRunnerChange,
    UnmatchedOrder,
    Matched,
}

/// Search order after the context table
const FALLBACK_ORDER: [FieldTable; 9] = [
    FieldTable::RunnerChange,
    FieldTable::MarketDefinition,
    FieldTable::RunnerDefinition,
    FieldTable::MarketChange,
    FieldTable::OrderChange,
    FieldTable::UnmatchedOrder,
    FieldTable::Matched,
    FieldTable::TopLevel,
    FieldTable::OrderRunnerChange,
];

/// Listing order for `dictionary list`
const LISTING_ORDER: [FieldTable; 9] = [
    FieldTable::TopLevel,
    FieldTable::MarketChange,
    FieldTable::MarketDefinition,
    FieldTable::RunnerDefinition,
    FieldTable::RunnerChange,
    FieldTable::OrderChange,
    FieldTable::OrderRunnerChange,
    FieldTable::UnmatchedOrder,
    FieldTable::Matched,
];

impl FieldTable {
    /// First table consulted for a context. Root keys start at the top-level table and
    /// `runners` starts at the runner-definition table, unlike the plain fallback order.
    fn for_context(context: Option<ContextTag>) -> Self {
        match context {
            None => FieldTable::TopLevel,
            Some(ContextTag::MarketChange) => FieldTable::MarketChange,
            Some(ContextTag::OrderChange) => FieldTable::OrderChange,
            Some(ContextTag::MarketDefinition) => FieldTable::MarketDefinition,
            Some(ContextTag::RunnerChange) => FieldTable::RunnerChange,
            Some(ContextTag::RunnerDefinition) => FieldTable::RunnerDefinition,
            Some(ContextTag::OrderRunnerChange) => FieldTable::OrderRunnerChange,
            Some(ContextTag::UnmatchedOrder) => FieldTable::UnmatchedOrder,
        }
    }

    fn fields(self) -> &'static [FieldDef] {
        match self {
            FieldTable::TopLevel => TOP_LEVEL_FIELDS,
            FieldTable::MarketChange => MARKET_CHANGE_FIELDS,
            FieldTable::MarketDefinition => MARKET_DEFINITION_FIELDS,
            FieldTable::RunnerDefinition => RUNNER_DEFINITION_FIELDS,
            FieldTable::RunnerChange => RUNNER_CHANGE_FIELDS,
            FieldTable::OrderChange => ORDER_CHANGE_FIELDS,
            FieldTable::OrderRunnerChange => ORDER_RUNNER_CHANGE_FIELDS,
            FieldTable::UnmatchedOrder => UNMATCHED_ORDER_FIELDS,
            FieldTable::Matched => MATCHED_FIELDS,
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            FieldTable::TopLevel => "Top Level",
            FieldTable::MarketChange => "Market Change",
            FieldTable::MarketDefinition => "Market Definition",
            FieldTable::RunnerDefinition => "Runner Definition",
            FieldTable::RunnerChange => "Runner Change (Prices)",
            FieldTable::OrderChange => "Order Change",
            FieldTable::OrderRunnerChange => "Order Runner Change",
            FieldTable::UnmatchedOrder => "Unmatched Orders",
            FieldTable::Matched => "Matched Bets",
        }
    }

    fn find(self, key: &str) -> Option<FieldDef> {
        self.fields().iter().find(|def| def.key == key).copied()
    }
}

/// ML relevance implied by a field category
///
/// Prices, ladders and traded volume drive most models; market state and
/// structure are useful covariates; identifiers and control flags are not.
pub fn relevance_for_category(category: &str) -> &'static str {
    match category {
        "Price - Core" | "Price" | "Volume" | "Trade History" | "Starting Price" => "high",
        c if c.starts_with("Order Book") => "high",
        "Market State" | "Market Type" | "Market Structure" | "Event Timing"
        | "Event Location" | "Runner State" | "Runner Attributes" | "Handicap"
        | "Matched Bets" | "Bet Details" | "Racing Metadata" | "Line Market"
        | "Market Economics" => "medium",
        _ => "low",
    }
}

/// Dictionary backed by the built-in exchange stream tables
#[derive(Debug, Clone, Copy, Default)]
pub struct BetfairDictionary;

impl BetfairDictionary {
    pub fn new() -> Self {
        Self
    }
}

impl FieldMetadataLookup for BetfairDictionary {
    fn lookup(&self, key: &str, context: Option<ContextTag>) -> FieldMetadata {
        let first = FieldTable::for_context(context);
        std::iter::once(first)
            .chain(FALLBACK_ORDER.iter().copied().filter(|t| *t != first))
            .find_map(|table| table.find(key))
            .map(FieldDef::to_metadata)
            .unwrap_or_else(|| fallback_metadata(key))
    }

    fn category_info(&self, category: &str) -> Option<CategoryDescriptor> {
        CATEGORY_DESCRIPTORS
            .iter()
            .find(|(name, ..)| *name == category)
            .map(|(_, icon, description, color)| CategoryDescriptor {
                icon: icon.to_string(),
                description: description.to_string(),
                color: color.to_string(),
            })
    }

    fn listing(&self) -> DictionaryListing {
        let sections = LISTING_ORDER
            .iter()
            .map(|table| DictionarySection {
                name: table.display_name().to_string(),
                fields: table
                    .fields()
                    .iter()
                    .map(|def| (def.key.to_string(), def.to_metadata()))
                    .collect(),
            })
            .collect();

        let categories: BTreeMap<String, CategoryDescriptor> = CATEGORY_DESCRIPTORS
            .iter()
            .map(|(name, icon, description, color)| {
                (
                    name.to_string(),
                    CategoryDescriptor {
                        icon: icon.to_string(),
                        description: description.to_string(),
                        color: color.to_string(),
                    },
                )
            })
            .collect();

        DictionaryListing {
            source: "built-in".to_string(),
            sections,
            categories,
        }
    }
}

// Exchange stream field tables

const TOP_LEVEL_FIELDS: &[FieldDef] = &[
    FieldDef::new(
        "op",
        "Operation Type",
        "Message operation type (mcm=Market Change, ocm=Order Change)",
        "Message Metadata",
    ),
    FieldDef::new(
        "pt",
        "Publish Time",
        "Timestamp when message was published (milliseconds since epoch)",
        "Message Metadata",
    ),
    FieldDef::new(
        "clk",
        "Clock Token",
        "Sequence token for message ordering and recovery",
        "Message Metadata",
    ),
    FieldDef::new(
        "ct",
        "Change Type",
        "Type of change (SUB_IMAGE, RESUB_DELTA, HEARTBEAT)",
        "Message Metadata",
    ),
    FieldDef::new(
        "status",
        "Stream Status",
        "Stream health (null=OK, 503=latency issues)",
        "Message Metadata",
    ),
    FieldDef::new(
        "mc",
        "Market Changes",
        "Array of market change objects",
        "Market Data",
    ),
    FieldDef::new(
        "oc",
        "Order Changes",
        "Array of order change objects",
        "Order Data",
    ),
    FieldDef::new(
        "id",
        "Identifier",
        "Unique identifier (market ID, selection ID, or bet ID depending on context)",
        "Identifier",
    ),
    FieldDef::new(
        "img",
        "Image Flag",
        "If true, this is a full snapshot (not delta)",
        "Message Metadata",
    ),
    FieldDef::new(
        "con",
        "Conflated",
        "True if multiple updates were combined in this message",
        "Message Metadata",
    ),
];

const MARKET_CHANGE_FIELDS: &[FieldDef] = &[
    FieldDef::new(
        "id",
        "Market ID",
        "Unique Betfair market identifier (e.g., 1.123456789)",
        "Market Identity",
    ),
    FieldDef::new(
        "marketDefinition",
        "Market Definition",
        "Full market metadata including event, venue, rules",
        "Market Metadata",
    ),
    FieldDef::new(
        "rc",
        "Runner Changes",
        "Array of price/volume updates for selections",
        "Price Data",
    ),
    FieldDef::new(
        "tv",
        "Total Volume",
        "Total amount matched on this market (GBP)",
        "Volume",
    ),
    FieldDef::new(
        "img",
        "Image Flag",
        "True = full market snapshot, False/null = delta update",
        "Message Control",
    ),
    FieldDef::new(
        "con",
        "Conflated",
        "Multiple updates combined in this message",
        "Message Control",
    ),
];

const MARKET_DEFINITION_FIELDS: &[FieldDef] = &[
    FieldDef::new(
        "marketId",
        "Market ID",
        "Unique market identifier",
        "Market Identity",
    ),
    FieldDef::new(
        "eventId",
        "Event ID",
        "Unique event identifier (groups related markets)",
        "Event Identity",
    ),
    FieldDef::new(
        "eventName",
        "Event Name",
        "Human-readable event name",
        "Event Identity",
    ),
    FieldDef::new(
        "marketName",
        "Market Name",
        "Human-readable market name",
        "Market Identity",
    ),
    FieldDef::new(
        "marketType",
        "Market Type",
        "Type of market (WIN, PLACE, FORECAST, etc.)",
        "Market Type",
    ),
    FieldDef::new(
        "venue",
        "Venue",
        "Racing venue / location",
        "Event Location",
    ),
    FieldDef::new(
        "countryCode",
        "Country Code",
        "ISO country code (GB, IE, US, etc.)",
        "Event Location",
    ),
    FieldDef::new(
        "timezone",
        "Timezone",
        "Event timezone",
        "Event Timing",
    ),
    FieldDef::new(
        "marketTime",
        "Market Start Time",
        "Scheduled start time (ISO format)",
        "Event Timing",
    ),
    FieldDef::new(
        "openDate",
        "Open Date",
        "When market opened for betting",
        "Event Timing",
    ),
    FieldDef::new(
        "suspendTime",
        "Suspend Time",
        "When market was/will be suspended",
        "Event Timing",
    ),
    FieldDef::new(
        "settleTime",
        "Settlement Time",
        "When market was settled",
        "Event Timing",
    ),
    FieldDef::new(
        "status",
        "Market Status",
        "Current status (OPEN, SUSPENDED, CLOSED)",
        "Market State",
    ),
    FieldDef::new(
        "inPlay",
        "In-Play",
        "True if market is currently in-play",
        "Market State",
    ),
    FieldDef::new(
        "complete",
        "Complete",
        "True if market is complete/settled",
        "Market State",
    ),
    FieldDef::new(
        "bspMarket",
        "BSP Market",
        "True if Betfair Starting Price available",
        "Market Features",
    ),
    FieldDef::new(
        "bspReconciled",
        "BSP Reconciled",
        "True if BSP has been calculated",
        "Market State",
    ),
    FieldDef::new(
        "turnInPlayEnabled",
        "Turn In-Play",
        "True if market will turn in-play",
        "Market Features",
    ),
    FieldDef::new(
        "persistenceEnabled",
        "Persistence Enabled",
        "True if bet persistence is available",
        "Market Features",
    ),
    FieldDef::new(
        "crossMatching",
        "Cross Matching",
        "True if cross-matching enabled",
        "Market Features",
    ),
    FieldDef::new(
        "runnersVoidable",
        "Runners Voidable",
        "True if runners can be voided",
        "Market Features",
    ),
    FieldDef::new(
        "numberOfActiveRunners",
        "Active Runners",
        "Number of active selections",
        "Market Structure",
    ),
    FieldDef::new(
        "numberOfWinners",
        "Number of Winners",
        "How many winners this market has",
        "Market Structure",
    ),
    FieldDef::new(
        "bettingType",
        "Betting Type",
        "Type of betting (ODDS, LINE, RANGE, ASIAN_HANDICAP)",
        "Market Type",
    ),
    FieldDef::new(
        "marketBaseRate",
        "Commission Rate",
        "Base commission rate (%)",
        "Market Economics",
    ),
    FieldDef::new(
        "discountAllowed",
        "Discount Allowed",
        "True if discount rate applies",
        "Market Economics",
    ),
    FieldDef::new(
        "betDelay",
        "Bet Delay",
        "Seconds orders are held before matching (in-play)",
        "Market Rules",
    ),
    FieldDef::new(
        "regulators",
        "Regulators",
        "Market regulators",
        "Compliance",
    ),
    FieldDef::new(
        "eachWayDivisor",
        "Each Way Divisor",
        "Divisor for place part of each-way bets",
        "Market Rules",
    ),
    FieldDef::new(
        "runners",
        "Runners List",
        "Array of runner definitions",
        "Market Structure",
    ),
    FieldDef::new(
        "version",
        "Version",
        "Market definition version number",
        "Market Metadata",
    ),
    FieldDef::new(
        "lineMaxUnit",
        "Line Max Unit",
        "Maximum value for line markets",
        "Line Market",
    ),
    FieldDef::new(
        "lineMinUnit",
        "Line Min Unit",
        "Minimum value for line markets",
        "Line Market",
    ),
    FieldDef::new(
        "lineInterval",
        "Line Interval",
        "Step interval for line markets",
        "Line Market",
    ),
    FieldDef::new(
        "priceLadderDefinition",
        "Price Ladder",
        "Price ladder definition",
        "Market Structure",
    ),
    FieldDef::new(
        "keyLineDefinition",
        "Key Line Definition",
        "Key line handicap definition",
        "Line Market",
    ),
    FieldDef::new(
        "raceType",
        "Race Type",
        "Type of race (Flat, Hurdle, Chase, etc.)",
        "Racing Metadata",
    ),
];

const RUNNER_DEFINITION_FIELDS: &[FieldDef] = &[
    FieldDef::new(
        "id",
        "Selection ID",
        "Unique runner/selection identifier",
        "Runner Identity",
    ),
    FieldDef::new(
        "sortPriority",
        "Sort Priority",
        "Display order on Betfair website",
        "Display",
    ),
    FieldDef::new(
        "name",
        "Runner Name",
        "Name of horse/selection",
        "Runner Identity",
    ),
    FieldDef::new(
        "status",
        "Runner Status",
        "Status (ACTIVE, WINNER, LOSER, REMOVED)",
        "Runner State",
    ),
    FieldDef::new(
        "hc",
        "Handicap",
        "Handicap value (if applicable)",
        "Runner Attributes",
    ),
    FieldDef::new(
        "adjustmentFactor",
        "Adjustment Factor",
        "Rule 4 deduction factor if removed",
        "Market Rules",
    ),
    FieldDef::new(
        "bsp",
        "BSP",
        "Betfair Starting Price",
        "Price",
    ),
    FieldDef::new(
        "removalDate",
        "Removal Date",
        "When runner was removed (if applicable)",
        "Runner State",
    ),
];

const RUNNER_CHANGE_FIELDS: &[FieldDef] = &[
    FieldDef::new(
        "id",
        "Selection ID",
        "Unique runner/selection identifier",
        "Runner Identity",
    ),
    FieldDef::new(
        "ltp",
        "Last Traded Price",
        "Most recent matched price",
        "Price - Core",
    ),
    FieldDef::new(
        "tv",
        "Traded Volume",
        "Total volume matched on this runner (GBP)",
        "Volume",
    ),
    FieldDef::new(
        "batb",
        "Best Available To Back",
        "Best back prices [level, price, size]",
        "Order Book - Back",
    ),
    FieldDef::new(
        "batl",
        "Best Available To Lay",
        "Best lay prices [level, price, size]",
        "Order Book - Lay",
    ),
    FieldDef::new(
        "bdatb",
        "Best Display Available To Back",
        "Best display back prices (virtual)",
        "Order Book - Back (Virtual)",
    ),
    FieldDef::new(
        "bdatl",
        "Best Display Available To Lay",
        "Best display lay prices (virtual)",
        "Order Book - Lay (Virtual)",
    ),
    FieldDef::new(
        "atb",
        "Available To Back",
        "Full depth back ladder [price, size]",
        "Order Book - Full Depth",
    ),
    FieldDef::new(
        "atl",
        "Available To Lay",
        "Full depth lay ladder [price, size]",
        "Order Book - Full Depth",
    ),
    FieldDef::new(
        "trd",
        "Traded Ladder",
        "All trades at each price [price, size]",
        "Trade History",
    ),
    FieldDef::new(
        "spb",
        "SP Back",
        "Starting Price back offers [price, size]",
        "Starting Price",
    ),
    FieldDef::new(
        "spl",
        "SP Lay",
        "Starting Price lay offers [price, size]",
        "Starting Price",
    ),
    FieldDef::new(
        "spn",
        "SP Near Price",
        "Betfair SP near projection",
        "Starting Price",
    ),
    FieldDef::new(
        "spf",
        "SP Far Price",
        "Betfair SP far projection",
        "Starting Price",
    ),
    FieldDef::new(
        "hc",
        "Handicap",
        "Handicap value for Asian markets",
        "Handicap",
    ),
];

const ORDER_CHANGE_FIELDS: &[FieldDef] = &[
    FieldDef::new(
        "id",
        "Account ID",
        "Betfair account identifier",
        "Account",
    ),
    FieldDef::new(
        "orc",
        "Order Runner Changes",
        "Changes to orders on specific runners",
        "Order Data",
    ),
    FieldDef::new(
        "closed",
        "Closed",
        "True if orders are closed",
        "Order State",
    ),
    FieldDef::new(
        "fullImage",
        "Full Image",
        "True if this is complete order state",
        "Message Control",
    ),
];

const UNMATCHED_ORDER_FIELDS: &[FieldDef] = &[
    FieldDef::new(
        "id",
        "Bet ID",
        "Unique bet identifier",
        "Bet Identity",
    ),
    FieldDef::new(
        "p",
        "Price",
        "Order price",
        "Bet Details",
    ),
    FieldDef::new(
        "s",
        "Size",
        "Order size (GBP)",
        "Bet Details",
    ),
    FieldDef::new(
        "side",
        "Side",
        "B=Back, L=Lay",
        "Bet Details",
    ),
    FieldDef::new(
        "status",
        "Status",
        "Order status (E=Executable, EC=Execution Complete)",
        "Bet State",
    ),
    FieldDef::new(
        "pt",
        "Persistence Type",
        "L=Lapse, P=Persist, MOC=Market On Close",
        "Bet Details",
    ),
    FieldDef::new(
        "ot",
        "Order Type",
        "L=Limit, MOC=Market On Close, LOC=Limit On Close",
        "Bet Details",
    ),
    FieldDef::new(
        "pd",
        "Placed Date",
        "When order was placed",
        "Bet Timing",
    ),
    FieldDef::new(
        "md",
        "Matched Date",
        "When last matched",
        "Bet Timing",
    ),
    FieldDef::new(
        "cd",
        "Cancelled Date",
        "When cancelled (if applicable)",
        "Bet Timing",
    ),
    FieldDef::new(
        "ld",
        "Lapsed Date",
        "When lapsed (if applicable)",
        "Bet Timing",
    ),
    FieldDef::new(
        "avp",
        "Average Price Matched",
        "Average matched price",
        "Bet Details",
    ),
    FieldDef::new(
        "sm",
        "Size Matched",
        "Amount matched",
        "Bet Details",
    ),
    FieldDef::new(
        "sr",
        "Size Remaining",
        "Amount unmatched",
        "Bet Details",
    ),
    FieldDef::new(
        "sl",
        "Size Lapsed",
        "Amount lapsed",
        "Bet Details",
    ),
    FieldDef::new(
        "sc",
        "Size Cancelled",
        "Amount cancelled",
        "Bet Details",
    ),
    FieldDef::new(
        "sv",
        "Size Voided",
        "Amount voided",
        "Bet Details",
    ),
    FieldDef::new(
        "rac",
        "Regulator Auth Code",
        "Regulatory authorization code",
        "Compliance",
    ),
    FieldDef::new(
        "rc",
        "Regulator Code",
        "Regulatory code",
        "Compliance",
    ),
    FieldDef::new(
        "rfo",
        "Reference Order",
        "Reference to original order",
        "Bet Identity",
    ),
    FieldDef::new(
        "rfs",
        "Reference Strategy",
        "Strategy reference",
        "Bet Identity",
    ),
    FieldDef::new(
        "lsrc",
        "Lapse Status Reason Code",
        "Why order was lapsed",
        "Bet State",
    ),
];

const MATCHED_FIELDS: &[FieldDef] = &[
    FieldDef::new(
        "mb",
        "Matched Backs",
        "Matched back bets [price, size]",
        "Matched Bets",
    ),
    FieldDef::new(
        "ml",
        "Matched Lays",
        "Matched lay bets [price, size]",
        "Matched Bets",
    ),
];

const ORDER_RUNNER_CHANGE_FIELDS: &[FieldDef] = &[
    FieldDef::new(
        "id",
        "Selection ID",
        "Selection the order changes relate to",
        "Runner Identity",
    ),
    FieldDef::new(
        "fullImage",
        "Full Image",
        "True if this replaces all orders on the selection",
        "Message Control",
    ),
    FieldDef::new(
        "hc",
        "Handicap",
        "Handicap of the selection (if applicable)",
        "Handicap",
    ),
    FieldDef::new(
        "uo",
        "Unmatched Orders",
        "Array of unmatched order changes on the selection",
        "Order Data",
    ),
    FieldDef::new(
        "mb",
        "Matched Backs",
        "Matched back bets [price, size]",
        "Matched Bets",
    ),
    FieldDef::new(
        "ml",
        "Matched Lays",
        "Matched lay bets [price, size]",
        "Matched Bets",
    ),
];

// (name, icon, description, color)
const CATEGORY_DESCRIPTORS: &[(&str, &str, &str, &str)] = &[
    ("Message Metadata", "📨", "Stream message control and timing", "#6B7280"),
    ("Market Identity", "🏷️", "Market identification fields", "#3B82F6"),
    ("Event Identity", "📅", "Event/race identification", "#8B5CF6"),
    ("Event Location", "📍", "Venue and location data", "#EC4899"),
    ("Event Timing", "⏰", "Timing and scheduling", "#F59E0B"),
    ("Market State", "🔄", "Current market status", "#10B981"),
    ("Market Features", "⚙️", "Market configuration options", "#6366F1"),
    ("Market Structure", "🏗️", "Market structure and composition", "#14B8A6"),
    ("Market Type", "📊", "Type of betting market", "#F97316"),
    ("Market Economics", "💰", "Commission and financial terms", "#EF4444"),
    ("Market Rules", "📋", "Betting rules and conditions", "#84CC16"),
    ("Runner Identity", "🏇", "Horse/selection identification", "#06B6D4"),
    ("Runner State", "🎯", "Runner status and results", "#22C55E"),
    ("Runner Attributes", "📈", "Runner characteristics", "#A855F7"),
    ("Price - Core", "💲", "Core pricing data", "#EF4444"),
    ("Volume", "📊", "Trading volume data", "#3B82F6"),
    ("Order Book - Back", "📗", "Available to back (buy)", "#22C55E"),
    ("Order Book - Lay", "📕", "Available to lay (sell)", "#EF4444"),
    ("Order Book - Full Depth", "📚", "Complete order book", "#6366F1"),
    ("Trade History", "📜", "Historical trades", "#F59E0B"),
    ("Starting Price", "🏁", "BSP related data", "#EC4899"),
    ("Bet Identity", "🎫", "Bet identification", "#8B5CF6"),
    ("Bet Details", "📝", "Bet parameters", "#14B8A6"),
    ("Bet State", "⚡", "Bet status", "#F97316"),
    ("Bet Timing", "🕐", "Bet timestamps", "#6B7280"),
    ("Compliance", "🛡️", "Regulatory fields", "#64748B"),
];
