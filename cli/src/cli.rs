use clap::{Parser, ValueEnum};
use userlist_business::{BusinessConfig, ViewMode};

#[derive(Debug, Parser)]
#[command(name = "userlist")]
#[command(about = "Browse a paginated list of users", long_about = None)]
pub struct Cli {
    /// Number of pages to scroll through
    #[arg(long, short = 'p', default_value_t = 1)]
    pub pages: usize,

    /// How users are laid out
    #[arg(long, short = 'm', value_enum, default_value_t = Layout::List)]
    pub mode: Layout,

    /// Tiles per row in grid mode
    #[arg(long, default_value_t = 3)]
    pub columns: usize,

    /// Users per page (overrides USERLIST_PAGE_SIZE)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// API base URL (overrides USERLIST_API_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Seed for a stable remote result set (overrides USERLIST_SEED)
    #[arg(long)]
    pub seed: Option<String>,

    /// Show the card of the Nth loaded user (1-based) instead of the list
    #[arg(long, value_name = "N")]
    pub detail: Option<usize>,

    /// Reload from the first page after scrolling
    #[arg(long)]
    pub reload: bool,

    /// Print the final state as JSON instead of rendering it
    #[arg(long)]
    pub json: bool,

    /// Show timing/latency information
    #[arg(long)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    List,
    Grid,
}

impl From<Layout> for ViewMode {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::List => Self::List,
            Layout::Grid => Self::Grid,
        }
    }
}

impl Cli {
    /// Applies the flags on top of configuration loaded from the environment.
    pub fn apply_to(&self, mut config: BusinessConfig) -> BusinessConfig {
        if let Some(base_url) = &self.base_url {
            config = config.with_api_base_url(base_url.as_str());
        }
        if let Some(page_size) = self.page_size {
            config = config.with_page_size(page_size);
        }
        if let Some(seed) = &self.seed {
            config = config.with_seed(seed.clone());
        }
        config
    }
}
