use std::path::Path;

use crate::api::wallet::ProfilePicture;
use crate::commands;
use crate::models::Modal;

pub async fn execute(full_name: &str, picture_path: Option<&Path>) -> Result<(), String> {
    let picture = match picture_path {
        Some(path) => Some(load_picture(path)?),
        None => None,
    };

    let mut controller = commands::build_controller(true)?;
    controller.open_modal(Modal::EditProfile);
    controller.edit_profile(full_name, picture).await?;

    println!("✅ Profile updated successfully!");
    Ok(())
}

fn load_picture(path: &Path) -> Result<ProfilePicture, String> {
    let mime_type = match path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => return Err("Profile picture must be a jpg, png, gif or webp image".to_string()),
    };

    let bytes =
        std::fs::read(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "profile".to_string());

    Ok(ProfilePicture {
        file_name,
        mime_type: mime_type.to_string(),
        bytes,
    })
}
