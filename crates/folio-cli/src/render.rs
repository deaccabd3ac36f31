//! Terminal rendering of versions and diffs.

use colored::Colorize;
use folio_diff::{BlockDiff, ChangeType, VersionDiff, WordDiff};
use folio_types::{ArticleVersion, ContentBlock};
use similar::{ChangeTag, TextDiff};

/// Plain-text lines representing a block, children indented.
pub fn block_lines(block: &ContentBlock) -> Vec<String> {
    match block {
        ContentBlock::Heading1 { text }
        | ContentBlock::Heading2 { text }
        | ContentBlock::Heading3 { text } => {
            let level = block.heading_level().unwrap_or(1) as usize;
            vec![format!("{} {text}", "#".repeat(level))]
        }
        ContentBlock::Paragraph { text } => vec![text.clone()],
        ContentBlock::BulletedList { items } => items.iter().map(|i| format!("• {i}")).collect(),
        ContentBlock::NumberedList { items } => items
            .iter()
            .enumerate()
            .map(|(n, i)| format!("{}. {i}", n + 1))
            .collect(),
        ContentBlock::TodoList { items } => items
            .iter()
            .map(|i| format!("[{}] {}", if i.checked { "x" } else { " " }, i.text))
            .collect(),
        ContentBlock::Quote { text } => text.lines().map(|l| format!("> {l}")).collect(),
        ContentBlock::Callout { text, icon } => {
            let icon = if icon.is_empty() { "💡" } else { icon.as_str() };
            vec![format!("{icon} {text}")]
        }
        ContentBlock::Code { text, language } => {
            let mut lines = vec![format!("```{language}")];
            lines.extend(text.lines().map(str::to_string));
            lines.push("```".to_string());
            lines
        }
        ContentBlock::Divider => vec!["───".to_string()],
        ContentBlock::Image { url, caption } => vec![media_line("image", url, caption)],
        ContentBlock::Video { url, caption } => vec![media_line("video", url, caption)],
        ContentBlock::Embed { url, caption } => vec![media_line("embed", url, caption)],
        ContentBlock::Toggle { text, children } => {
            let mut lines = vec![format!("▸ {text}")];
            lines.extend(children.iter().flat_map(block_lines).map(|l| format!("  {l}")));
            lines
        }
        ContentBlock::Table { rows, .. } => rows
            .iter()
            .map(|row| format!("| {} |", row.join(" | ")))
            .collect(),
        ContentBlock::ColumnList { columns } => {
            let mut lines = Vec::new();
            for (n, column) in columns.iter().enumerate() {
                lines.push(format!("column {}:", n + 1));
                lines.extend(column.iter().flat_map(block_lines).map(|l| format!("  {l}")));
            }
            lines
        }
    }
}

fn media_line(kind: &str, url: &str, caption: &str) -> String {
    if caption.is_empty() {
        format!("[{kind}] {url}")
    } else {
        format!("[{kind}] {url} ({caption})")
    }
}

/// Render an article listing with published version counts.
pub fn render_articles(articles: &[(String, usize)]) -> String {
    if articles.is_empty() {
        return "No published articles.\n".to_string();
    }
    let mut out = String::new();
    for (slug, count) in articles {
        let plural = if *count > 1 { "s" } else { "" };
        out.push_str(&format!("{}  {}\n", slug.bold(), format!("{count} version{plural}").dimmed()));
    }
    out
}

/// JSON form of an article listing: `[{"slug": ..., "versions": n}]`.
pub fn articles_json(articles: &[(String, usize)]) -> serde_json::Value {
    articles
        .iter()
        .map(|(slug, count)| serde_json::json!({ "slug": slug, "versions": count }))
        .collect()
}

/// Render a version's content.
pub fn render_version(version: &ArticleVersion) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {} (#{})\n",
        version.article_slug.bold(),
        version.label().yellow(),
        version.version_number
    ));
    if !version.change_summary.is_empty() {
        out.push_str(&format!("{}\n", version.change_summary.dimmed()));
    }
    out.push('\n');
    for block in &version.content {
        for line in block_lines(block) {
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// Render a version listing, newest first.
pub fn render_versions(versions: &[ArticleVersion]) -> String {
    let mut out = String::new();
    for version in versions {
        let date = version
            .published_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "----------".to_string());
        let marker = if version.is_current_version {
            format!(" ({})", "current".green())
        } else {
            String::new()
        };
        out.push_str(&format!(
            "{:>4}  {:<10}  {}{}  {}\n",
            format!("#{}", version.version_number).yellow(),
            version.label(),
            date.dimmed(),
            marker,
            version.change_summary
        ));
    }
    out
}

/// Render a diff. Unchanged rows are skipped unless `show_unchanged`.
pub fn render_diff(diff: &VersionDiff, show_unchanged: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {} → {}\n",
        diff.to_version.article_slug.bold(),
        diff.from_version.label().yellow(),
        diff.to_version.label().yellow()
    ));
    out.push_str(&format!("{}\n", diff.change_summary().bold()));

    let rows: Box<dyn Iterator<Item = &BlockDiff> + '_> = if show_unchanged {
        Box::new(diff.changes.iter())
    } else {
        Box::new(diff.visible_changes())
    };
    for row in rows {
        out.push('\n');
        out.push_str(&render_row(row));
    }
    out
}

fn render_row(row: &BlockDiff) -> String {
    let mut out = String::new();
    let header = format!("[{}]", row.block_type);
    match row.change {
        ChangeType::Added => {
            out.push_str(&format!("{} {}\n", "+".green().bold(), header.green()));
            push_lines(&mut out, row.new_content.as_ref(), |l| format!("  {}", l.green()));
        }
        ChangeType::Removed => {
            out.push_str(&format!("{} {}\n", "-".red().bold(), header.red()));
            push_lines(&mut out, row.old_content.as_ref(), |l| {
                format!("  {}", l.red().strikethrough())
            });
        }
        ChangeType::Unchanged => {
            out.push_str(&format!("  {}\n", header.dimmed()));
            push_lines(&mut out, row.content(), |l| format!("  {}", l.dimmed()));
        }
        ChangeType::Modified => {
            out.push_str(&format!("{} {}\n", "~".yellow().bold(), header.yellow()));
            match (&row.word_diffs, &row.old_content, &row.new_content) {
                (Some(words), _, _) => {
                    out.push_str(&format!("  {}\n", render_words(words)));
                }
                (None, Some(ContentBlock::Code { text: old, .. }), Some(ContentBlock::Code { text: new, .. })) => {
                    out.push_str(&render_line_diff(old, new));
                }
                (None, old, new) => {
                    out.push_str(&format!("  {}\n", "before:".dimmed()));
                    push_lines(&mut out, old.as_ref(), |l| format!("    {}", l.red()));
                    out.push_str(&format!("  {}\n", "after:".dimmed()));
                    push_lines(&mut out, new.as_ref(), |l| format!("    {}", l.green()));
                }
            }
        }
    }
    out
}

fn push_lines(out: &mut String, block: Option<&ContentBlock>, style: impl Fn(&str) -> String) {
    if let Some(block) = block {
        for line in block_lines(block) {
            out.push_str(&style(&line));
            out.push('\n');
        }
    }
}

/// Inline word highlighting. Empty boundary tokens are not printed.
pub fn render_words(words: &[WordDiff]) -> String {
    words
        .iter()
        .filter(|w| !w.text.is_empty())
        .map(|w| match w.change {
            ChangeType::Added => w.text.green().underline().to_string(),
            ChangeType::Removed => w.text.red().strikethrough().to_string(),
            ChangeType::Unchanged | ChangeType::Modified => w.text.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Line diff of two code bodies.
fn render_line_diff(old: &str, new: &str) -> String {
    let mut out = String::new();
    let diff = TextDiff::from_lines(old, new);
    for change in diff.iter_all_changes() {
        let line = change.value().trim_end_matches('\n');
        let rendered = match change.tag() {
            ChangeTag::Equal => format!("    {}", line.dimmed()),
            ChangeTag::Delete => format!("  {} {}", "-".red(), line.red()),
            ChangeTag::Insert => format!("  {} {}", "+".green(), line.green()),
        };
        out.push_str(&rendered);
        out.push('\n');
    }
    out
}
