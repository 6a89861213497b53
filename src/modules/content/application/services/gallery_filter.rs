use crate::content::domain::entities::Photo;

/// Filter value that matches every photo.
pub const ALL_TAGS: &str = "all";

/// Filter choices for the gallery: `all`, then each tag in first-seen order.
pub fn available_tags(photos: &[Photo]) -> Vec<String> {
    let mut tags = vec![ALL_TAGS.to_string()];
    for tag in photos.iter().filter_map(|p| p.tag.as_deref()) {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// Photos matching `filter`, in their original order.
pub fn filter_by_tag<'a>(photos: &'a [Photo], filter: &str) -> Vec<&'a Photo> {
    if filter == ALL_TAGS {
        return photos.iter().collect();
    }
    photos
        .iter()
        .filter(|p| p.tag.as_deref() == Some(filter))
        .collect()
}
