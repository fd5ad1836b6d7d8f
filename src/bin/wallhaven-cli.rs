use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use wallhaven_api::{
    random_seed, Categories, Purity, SearchQuery, Sorting, TopRange, WallhavenClient,
};

#[derive(Parser)]
#[command(name = "wallhaven-cli")]
#[command(about = "CLI for the Wallhaven.cc wallpaper API", long_about = None)]
struct Cli {
    /// Wallhaven API key (can also be set via WALLHAVEN_API_KEY env var)
    #[arg(long, env = "WALLHAVEN_API_KEY")]
    api_key: Option<String>,

    /// Delay between requests in milliseconds, to stay under the rate limit
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum SortOption {
    DateAdded,
    Relevance,
    Random,
    Views,
    Favorites,
    Toplist,
}

impl From<SortOption> for Sorting {
    fn from(s: SortOption) -> Self {
        match s {
            SortOption::DateAdded => Sorting::DateAdded,
            SortOption::Relevance => Sorting::Relevance,
            SortOption::Random => Sorting::Random,
            SortOption::Views => Sorting::Views,
            SortOption::Favorites => Sorting::Favorites,
            SortOption::Toplist => Sorting::Toplist,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Search for wallpapers
    Search {
        /// Search query (keywords, +tag/-tag, @username)
        query: Option<String>,

        /// Sort order
        #[arg(short, long, value_enum, default_value_t = SortOption::Relevance)]
        sorting: SortOption,

        /// Include people category (general and anime are always on)
        #[arg(long)]
        people: bool,

        /// SFW results only
        #[arg(long)]
        sfw: bool,

        /// Result page
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Show metadata for a wallpaper
    Info {
        /// Wallpaper ID, e.g. 94x38z
        id: String,
    },
    /// Download a wallpaper's full-size image
    Download {
        /// Wallpaper ID
        id: String,

        /// Output directory
        #[arg(short, long, default_value = "wallpapers")]
        output: PathBuf,
    },
    /// Show metadata for a tag
    Tag {
        /// Numeric tag ID
        id: u64,
    },
    /// List collections (your own with an API key, or a user's public ones)
    Collections {
        /// Username; omit to list your own collections
        username: Option<String>,
    },
    /// Show your account settings (requires API key)
    Settings,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut builder = WallhavenClient::builder();
    if let Some(key) = &cli.api_key {
        builder = builder.api_key(key);
    }
    if cli.delay_ms > 0 {
        builder = builder.request_delay(Duration::from_millis(cli.delay_ms));
    }
    let client = builder.build()?;

    match &cli.command {
        Commands::Search {
            query,
            sorting,
            people,
            sfw,
            page,
        } => {
            let mut search = SearchQuery::new()
                .sorting((*sorting).into())
                .categories(Categories {
                    general: true,
                    anime: true,
                    people: *people,
                })
                .page(*page);
            if let Some(q) = query {
                search = search.query(q);
            }
            if *sfw {
                search = search.purity(Purity::sfw_only());
            }
            if *sorting == SortOption::Random {
                search = search.seed(random_seed());
            }
            if *sorting == SortOption::Toplist {
                search = search.top_range(TopRange::OneMonth);
            }

            let results = client.search(&search).await?;
            println!(
                "Page {}/{} ({} total)",
                results.meta.current_page, results.meta.last_page, results.meta.total
            );
            for (i, wallpaper) in results.data.iter().enumerate() {
                println!(
                    "{:2}. {} {:>10} {:>8} views  {}",
                    i + 1,
                    wallpaper.id,
                    wallpaper.resolution,
                    wallpaper.views,
                    wallpaper.url
                );
            }
        }
        Commands::Info { id } => {
            let wallpaper = client.wallpaper(id).await?;
            println!("ID:         {}", wallpaper.id);
            println!("Resolution: {}", wallpaper.resolution);
            println!("Category:   {} ({})", wallpaper.category, wallpaper.purity);
            println!("Views:      {}", wallpaper.views);
            println!("Favorites:  {}", wallpaper.favorites);
            println!("File:       {} ({} bytes)", wallpaper.file_type, wallpaper.file_size);
            if let Some(uploader) = &wallpaper.uploader {
                println!("Uploader:   {}", uploader.username);
            }
            if !wallpaper.tags.is_empty() {
                println!("Tags:       {}", wallpaper.tags_string(", "));
            }
            println!("Image:      {}", wallpaper.path);
        }
        Commands::Download { id, output } => {
            println!("Downloading wallpaper {}...", id);
            let wallpaper = client.wallpaper(id).await?;
            let target = output.join(wallpaper.filename());
            let path = client.download_wallpaper_to(id, &target).await?;
            println!("Saved to {}", path.display());
        }
        Commands::Tag { id } => {
            let tag = client.tag(*id).await?;
            println!("Tag #{}: {}", tag.id, tag.name);
            if !tag.alias.is_empty() {
                println!("Aliases:  {}", tag.alias);
            }
            println!("Category: {} ({})", tag.category, tag.purity);
        }
        Commands::Collections { username } => {
            let collections = match username {
                Some(name) => client.user_collections(name).await?,
                None => client.my_collections().await?,
            };
            for collection in collections {
                println!(
                    "{:>8}  {:<24} {:>5} wallpapers  {}",
                    collection.id,
                    collection.label,
                    collection.count,
                    if collection.is_public() { "public" } else { "private" }
                );
            }
        }
        Commands::Settings => {
            let settings = client.settings().await?;
            println!("Thumb size:    {}", settings.thumb_size);
            println!("Per page:      {}", settings.per_page);
            println!("Categories:    {}", settings.categories.join(", "));
            println!("Purity:        {}", settings.purity.join(", "));
            println!("Toplist range: {}", settings.toplist_range);
        }
    }

    Ok(())
}
