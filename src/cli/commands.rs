use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::app::{AppContext, Result};
use crate::domain::{Post, Section};
use crate::feed::{PageOutcome, PostFeed, PostSlot};
use crate::tabs::TabController;

pub async fn show(ctx: &AppContext, section: Section, count: usize) -> Result<()> {
    let base_url = ctx.base_url()?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut feed = PostFeed::new(section, &base_url, ctx.fetcher.clone(), tx);

    let mut index = 0;
    while index < count {
        match feed.ensure(index) {
            PostSlot::Ready(post) => {
                println!("{:>3}. #{} {}", index + 1, post.id, post.display_title());
                println!("     {}", post.media_url);
                index += 1;
            }
            PostSlot::Pending => {
                let Some(outcome) = rx.recv().await else { break };
                feed.apply(outcome)?;
            }
            PostSlot::Exhausted => {
                println!("No more posts in {}", section.display_title().to_lowercase());
                break;
            }
        }
    }

    Ok(())
}

pub async fn post(ctx: &AppContext, id: u64) -> Result<()> {
    let base_url = ctx.base_url()?;
    let url = format!("{}/{}?json=true", base_url.as_str().trim_end_matches('/'), id);

    let body = ctx.fetcher.fetch(&url).await?;
    let post = ctx.parser.parse_post(&body)?;
    print_post(&post);

    Ok(())
}

pub async fn random(ctx: &AppContext) -> Result<()> {
    let base_url = ctx.base_url()?;
    let url = format!("{}/random?json=true", base_url.as_str().trim_end_matches('/'));

    let body = ctx.fetcher.fetch(&url).await?;
    let post = ctx.parser.parse_post(&body)?;
    print_post(&post);

    Ok(())
}

pub async fn browse(ctx: &AppContext) -> Result<()> {
    let (mut tabs, mut rx) = ctx.tabs()?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("n/enter: next  p: previous  1/2/3: switch tab  q: quit");

    loop {
        render_current(&mut tabs, &mut rx).await;

        print!("[{} #{}] > ", tabs.active_section(), tabs.active_feed().cursor() + 1);
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else { break };
        match line.trim() {
            "n" | "" => {
                tabs.next();
            }
            "p" => {
                tabs.previous();
            }
            "1" => tabs.select_tab(0),
            "2" => tabs.select_tab(1),
            "3" => tabs.select_tab(2),
            "q" => break,
            other => println!("Unknown command: {other}"),
        }
    }

    Ok(())
}

/// Resolve the active tab's current post, draining the completion channel
/// while it is pending. A fetch failure is printed, not fatal; the cursor
/// stays put so the next render retries the same page.
async fn render_current(
    tabs: &mut TabController,
    rx: &mut mpsc::UnboundedReceiver<PageOutcome>,
) {
    loop {
        match tabs.current() {
            PostSlot::Ready(post) => {
                print_post(post);
                return;
            }
            PostSlot::Exhausted => {
                println!(
                    "-- no more posts in {} --",
                    tabs.active_section().display_title().to_lowercase()
                );
                return;
            }
            PostSlot::Pending => {}
        }

        let Some(outcome) = rx.recv().await else { return };
        if let Err(e) = tabs.apply(outcome) {
            println!("Fetch failed: {e}");
            return;
        }
    }
}

fn print_post(post: &Post) {
    println!();
    println!("#{} {}", post.id, post.display_title());
    println!("{}", post.media_url);
}
