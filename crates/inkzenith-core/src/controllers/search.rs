use crate::domain::{Post, PostId};

/// Case-insensitive substring match against title or content.
pub fn matches_query(post: &Post, query: &str) -> bool {
    let needle = query.to_lowercase();
    post.title.to_lowercase().contains(&needle) || post.content.to_lowercase().contains(&needle)
}

/// A completed search: the query and the matching posts in listing order.
///
/// Results are fetched in full and filtered in memory, so each search costs
/// one pass over the whole collection.
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    pub query: String,
    pub rows: Vec<Post>,
}

impl SearchResults {
    pub fn filter(query: &str, all: Vec<Post>) -> Self {
        let rows = all
            .into_iter()
            .filter(|post| matches_query(post, query))
            .collect();
        Self {
            query: query.to_string(),
            rows,
        }
    }

    pub fn remove(&mut self, id: &PostId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|p| &p.id != id);
        self.rows.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn post(id: &str, title: &str, content: &str) -> Post {
        let now = Utc::now();
        Post {
            id: PostId::from(id),
            title: title.to_string(),
            image_url: None,
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_matches_title_or_content_case_insensitive() {
        let a = post("a", "Hello there", "<p>nothing</p>");
        let b = post("b", "Other", "say hello world");
        let c = post("c", "Unrelated", "<p>bye</p>");

        let results = SearchResults::filter("HELLO", vec![a, b, c]);
        let ids: Vec<_> = results.rows.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(results.query, "HELLO");
    }

    #[test]
    fn test_matches_inside_markup() {
        let p = post("a", "", "<h1>Rust</h1>");
        assert!(matches_query(&p, "h1>ru"));
    }

    #[test]
    fn test_remove() {
        let mut results = SearchResults::filter("x", vec![post("a", "x", ""), post("b", "x", "")]);
        assert!(results.remove(&PostId::from("a")));
        assert!(!results.remove(&PostId::from("a")));
        assert_eq!(results.rows.len(), 1);
    }
}
