//! Clap derive structures for the `hostly` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// hostly -- back-office CLI for multi-property hospitality admin
#[derive(Debug, Parser)]
#[command(
    name = "hostly",
    version,
    about = "Manage hospitality properties from the command line",
    long_about = "A CLI for administering the hostly back-office: properties,\n\
        rooms, amenities, galleries, policies, menus, tables, pricing\n\
        seasons, and events.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend profile to use
    #[arg(long, short = 'p', env = "HOSTLY_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Backend URL (overrides profile)
    #[arg(long, short = 'b', env = "HOSTLY_BACKEND", global = true)]
    pub backend: Option<String>,

    /// Admin API key
    #[arg(long, env = "HOSTLY_API_KEY", global = true, hide_env = true)]
    pub api_key: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "HOSTLY_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "HOSTLY_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "HOSTLY_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage properties
    #[command(alias = "prop", alias = "props")]
    Properties(PropertiesArgs),

    /// Manage hotel rooms
    Rooms(RoomsArgs),

    /// Manage the amenity catalog and per-property selections
    Amenities(AmenitiesArgs),

    /// Manage gallery media
    Gallery(GalleryArgs),

    /// Manage property policies
    Policies(PoliciesArgs),

    /// Manage menu items (cafes and restaurants)
    Menu(MenuArgs),

    /// Manage dining tables (cafes)
    Tables(TablesArgs),

    /// Manage pricing seasons (hotels)
    Pricing(PricingArgs),

    /// Manage venue events
    Events(EventsArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PROPERTIES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct PropertiesArgs {
    #[command(subcommand)]
    pub command: PropertiesCommand,
}

#[derive(Debug, Subcommand)]
pub enum PropertiesCommand {
    /// List all properties
    #[command(alias = "ls")]
    List {
        /// Filter by kind: hotel, cafe, or restaurant
        #[arg(long, value_enum)]
        kind: Option<KindArg>,

        /// Only show active properties
        #[arg(long)]
        active: bool,
    },

    /// Show a property's full detail (all loaded slices)
    Show {
        /// Property id or name
        property: String,

        /// Which detail tab to show
        #[arg(long, default_value = "overview")]
        tab: String,
    },

    /// List the detail tabs available for a property
    Tabs {
        /// Property id or name
        property: String,
    },

    /// Create a new property
    Create {
        /// Property name
        #[arg(long, required = true)]
        name: String,

        /// Kinds (comma-separated): hotel, cafe, restaurant
        #[arg(long, value_delimiter = ',', required = true, value_enum)]
        kinds: Vec<KindArg>,

        /// Location name
        #[arg(long)]
        location: Option<String>,

        /// Street address
        #[arg(long)]
        address: Option<String>,

        /// Nightly/base price for the listing
        #[arg(long)]
        price: Option<f64>,

        /// Guest capacity for the listing
        #[arg(long)]
        capacity: Option<i64>,
    },

    /// Update a property's record
    Update {
        /// Property id or name
        property: String,

        /// New property name
        #[arg(long)]
        name: Option<String>,

        /// Replace kinds (comma-separated)
        #[arg(long, value_delimiter = ',', value_enum)]
        kinds: Option<Vec<KindArg>>,

        /// Location name
        #[arg(long)]
        location: Option<String>,

        /// Street address
        #[arg(long)]
        address: Option<String>,
    },

    /// Enable (publish) a property
    Enable {
        /// Property id or name
        property: String,
    },

    /// Disable (unpublish) a property
    Disable {
        /// Property id or name
        property: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Hotel,
    Cafe,
    Restaurant,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ROOMS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct RoomsArgs {
    #[command(subcommand)]
    pub command: RoomsCommand,
}

#[derive(Debug, Subcommand)]
pub enum RoomsCommand {
    /// List a property's rooms
    #[command(alias = "ls")]
    List {
        /// Property id or name
        property: String,
    },

    /// Create a room
    Create {
        /// Property id or name
        property: String,

        #[command(flatten)]
        fields: RoomFields,
    },

    /// Update a room (full replace)
    Update {
        /// Property id or name
        property: String,

        /// Room id
        room_id: i64,

        #[command(flatten)]
        fields: RoomFields,
    },

    /// Delete a room
    Delete {
        /// Property id or name
        property: String,

        /// Room id
        room_id: i64,
    },
}

/// The backend PUT is a full replace, so all room fields are required.
#[derive(Debug, Args)]
pub struct RoomFields {
    /// Room number
    #[arg(long, required = true)]
    pub number: String,

    /// Room type: single, double, deluxe, or suite
    #[arg(long, required = true)]
    pub room_type: String,

    /// Base price per night
    #[arg(long, required = true)]
    pub price: f64,

    /// Maximum occupancy
    #[arg(long, default_value = "2")]
    pub occupancy: i64,

    /// Status: available, occupied, cleaning, or maintenance
    #[arg(long, default_value = "AVAILABLE")]
    pub status: String,

    /// Room is active
    #[arg(long, default_value = "true", action = clap::ArgAction::Set)]
    pub active: bool,

    /// Room is bookable
    #[arg(long, default_value = "true", action = clap::ArgAction::Set)]
    pub bookable: bool,

    /// Amenity feature ids (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub amenities: Option<Vec<i64>>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  AMENITIES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct AmenitiesArgs {
    #[command(subcommand)]
    pub command: AmenitiesCommand,
}

#[derive(Debug, Subcommand)]
pub enum AmenitiesCommand {
    /// List the global amenity catalog
    Catalog,

    /// Add a feature to the global catalog
    Create {
        /// Feature name
        #[arg(long, required = true)]
        name: String,
    },

    /// Show a property's selected amenities
    Show {
        /// Property id or name
        property: String,
    },

    /// Replace a property's amenity selection
    Set {
        /// Property id or name
        property: String,

        /// Amenity feature ids (comma-separated); replaces the full set
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<i64>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  GALLERY
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct GalleryArgs {
    #[command(subcommand)]
    pub command: GalleryCommand,
}

#[derive(Debug, Subcommand)]
pub enum GalleryCommand {
    /// List a property's gallery items
    #[command(alias = "ls")]
    List {
        /// Property id or name
        property: String,
    },

    /// Upload media files to a property's gallery
    Upload {
        /// Property id or name
        property: String,

        /// Media category: room, property, food, event, or amenity
        #[arg(long, default_value = "PROPERTY")]
        category: String,

        /// Files to upload
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Delete a gallery item
    Delete {
        /// Property id or name
        property: String,

        /// Gallery item id
        gallery_id: i64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  POLICIES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct PoliciesArgs {
    #[command(subcommand)]
    pub command: PoliciesCommand,
}

#[derive(Debug, Subcommand)]
pub enum PoliciesCommand {
    /// List the global policy options
    Options,

    /// Add a policy option to the global catalog
    Create {
        /// Policy name
        #[arg(long, required = true)]
        name: String,

        /// Policy description
        #[arg(long)]
        description: Option<String>,
    },

    /// Show a property's attached policies
    Show {
        /// Property id or name
        property: String,
    },

    /// Replace a property's policy attachment
    Set {
        /// Property id or name
        property: String,

        /// Policy option ids (comma-separated); replaces the full set
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<i64>,

        /// Check-in time (24h HH:MM)
        #[arg(long, required = true)]
        check_in: String,

        /// Check-out time (24h HH:MM)
        #[arg(long, required = true)]
        check_out: String,

        /// Cancellation policy text
        #[arg(long)]
        cancellation: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  MENU
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct MenuArgs {
    #[command(subcommand)]
    pub command: MenuCommand,
}

#[derive(Debug, Subcommand)]
pub enum MenuCommand {
    /// List a property's menu items
    #[command(alias = "ls")]
    List {
        /// Property id or name
        property: String,
    },

    /// Add a menu item
    Add {
        /// Property id or name
        property: String,

        /// Item name
        #[arg(long, required = true)]
        name: String,

        /// Price
        #[arg(long, required = true)]
        price: f64,

        /// Menu category (e.g. "Drinks")
        #[arg(long)]
        category: Option<String>,

        /// Item is currently available
        #[arg(long, default_value = "true", action = clap::ArgAction::Set)]
        available: bool,
    },

    /// Update a menu item (full replace)
    Update {
        /// Property id or name
        property: String,

        /// Menu item id
        item_id: i64,

        /// Item name
        #[arg(long, required = true)]
        name: String,

        /// Price
        #[arg(long, required = true)]
        price: f64,

        /// Menu category
        #[arg(long)]
        category: Option<String>,

        /// Item is currently available
        #[arg(long, default_value = "true", action = clap::ArgAction::Set)]
        available: bool,
    },

    /// Delete a menu item
    Delete {
        /// Property id or name
        property: String,

        /// Menu item id
        item_id: i64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  TABLES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct TablesArgs {
    #[command(subcommand)]
    pub command: TablesCommand,
}

#[derive(Debug, Subcommand)]
pub enum TablesCommand {
    /// List a property's dining tables
    #[command(alias = "ls")]
    List {
        /// Property id or name
        property: String,
    },

    /// Add a dining table
    Add {
        /// Property id or name
        property: String,

        /// Table number/label
        #[arg(long, required = true)]
        number: String,

        /// Seat count
        #[arg(long, required = true)]
        seats: i64,

        /// Zone (e.g. "patio")
        #[arg(long)]
        zone: Option<String>,
    },

    /// Delete a dining table
    Delete {
        /// Property id or name
        property: String,

        /// Table id
        table_id: i64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PRICING
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct PricingArgs {
    #[command(subcommand)]
    pub command: PricingCommand,
}

#[derive(Debug, Subcommand)]
pub enum PricingCommand {
    /// List a property's pricing seasons
    #[command(alias = "ls")]
    List {
        /// Property id or name
        property: String,
    },

    /// Add a pricing season
    Add {
        /// Property id or name
        property: String,

        /// Season name
        #[arg(long, required = true)]
        name: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long, required = true)]
        start: String,

        /// End date (YYYY-MM-DD)
        #[arg(long, required = true)]
        end: String,

        /// Price multiplier (e.g. 1.25)
        #[arg(long, required = true)]
        multiplier: f64,
    },

    /// Delete a pricing season
    Delete {
        /// Property id or name
        property: String,

        /// Season id
        season_id: i64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  EVENTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct EventsArgs {
    #[command(subcommand)]
    pub command: EventsCommand,
}

#[derive(Debug, Subcommand)]
pub enum EventsCommand {
    /// List a property's upcoming events
    #[command(alias = "ls")]
    List {
        /// Property id or name
        property: String,
    },

    /// Add an event
    Add {
        /// Property id or name
        property: String,

        /// Event title
        #[arg(long, required = true)]
        title: String,

        /// Event date (YYYY-MM-DD)
        #[arg(long, required = true)]
        date: String,

        /// Event description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete an event
    Delete {
        /// Property id or name
        property: String,

        /// Event id
        event_id: i64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display current resolved configuration
    Show,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store an API key in the system keyring
    SetKey {
        /// Profile name
        #[arg(long)]
        profile: Option<String>,
    },

    /// Print the config file path
    Path,
}
