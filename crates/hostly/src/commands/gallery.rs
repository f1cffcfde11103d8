//! Gallery command handlers.

use std::path::Path;
use std::sync::Arc;

use tabled::Tabled;

use hostly_api::AdminClient;
use hostly_api::types::GalleryUploadFile;
use hostly_core::{
    Command as CoreCommand, CommandResult, GalleryCategory, GalleryItem, GalleryUploadRequest,
    PropertySession, TabId,
};

use crate::cli::{GalleryArgs, GalleryCommand, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct GalleryRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "URL")]
    url: String,
    #[tabled(rename = "Active")]
    active: String,
}

impl From<&GalleryItem> for GalleryRow {
    fn from(g: &GalleryItem) -> Self {
        Self {
            id: g.id,
            category: g.category.to_string(),
            file: g.media.file_name.clone().unwrap_or_default(),
            url: g.media.url.clone(),
            active: crate::output::yes_no(g.active),
        }
    }
}

/// Render the session's gallery slice in the chosen format.
pub fn render(session: &PropertySession, format: &OutputFormat) -> String {
    let items: Vec<GalleryItem> = session.gallery().iter().map(|g| (**g).clone()).collect();
    output::render_list(format, &items, GalleryRow::from, |g| g.id.to_string())
}

fn content_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("mp4") => "video/mp4",
        _ => "application/octet-stream",
    }
}

fn read_upload_file(path: &Path) -> Result<GalleryUploadFile, CliError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(ToOwned::to_owned)
        .ok_or_else(|| CliError::Validation {
            field: "files".into(),
            reason: format!("'{}' has no usable file name", path.display()),
        })?;
    let bytes = std::fs::read(path)?;
    Ok(GalleryUploadFile {
        file_name,
        content_type: content_type_for(path).to_string(),
        bytes,
    })
}

pub async fn handle(
    client: &Arc<AdminClient>,
    args: GalleryArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        GalleryCommand::List { property } => {
            let session = util::open_session(client, &property).await?;
            session.ensure_loaded(TabId::Gallery).await?;
            output::print_output(&render(&session, &global.output), global.quiet);
            Ok(())
        }

        GalleryCommand::Upload {
            property,
            category,
            files,
        } => {
            let category = category
                .parse()
                .unwrap_or_else(|_| GalleryCategory::Other(category.clone()));
            let files = files
                .iter()
                .map(|p| read_upload_file(p))
                .collect::<Result<Vec<_>, _>>()?;

            let session = util::open_session(client, &property).await?;
            let result = session
                .execute(CoreCommand::UploadGalleryMedia(GalleryUploadRequest {
                    category,
                    files,
                }))
                .await?;
            if !global.quiet {
                if let CommandResult::GalleryItems(items) = result {
                    eprintln!("Uploaded {} gallery item(s)", items.len());
                } else {
                    eprintln!("Gallery media uploaded");
                }
            }
            Ok(())
        }

        GalleryCommand::Delete {
            property,
            gallery_id,
        } => {
            if !util::confirm(&format!("Delete gallery item {gallery_id}?"), global.yes)? {
                return Ok(());
            }
            let session = util::open_session(client, &property).await?;
            session
                .execute(CoreCommand::DeleteGalleryItem { gallery_id })
                .await?;
            if !global.quiet {
                eprintln!("Gallery item {gallery_id} deleted");
            }
            Ok(())
        }
    }
}
