use crate::models::{Account, Comment, Watchlist};

pub trait Searchable {
    fn search_field(&self) -> &str;
}

impl Searchable for Account {
    fn search_field(&self) -> &str {
        &self.username
    }
}

impl Searchable for Watchlist {
    fn search_field(&self) -> &str {
        &self.list_name
    }
}

impl Searchable for Comment {
    fn search_field(&self) -> &str {
        &self.comment
    }
}

// 空查询返回全部，保持原顺序
pub fn filter<'a, T, F>(items: &'a [T], query: &str, field: F) -> Vec<&'a T>
where
    F: Fn(&T) -> &str,
{
    if query.is_empty() {
        return items.iter().collect();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| field(item).to_lowercase().contains(&needle))
        .collect()
}

pub fn search<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    filter(items, query, T::search_field)
}
