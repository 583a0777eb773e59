#[cfg(test)]
mod tests {
    use crate::database::entity::post;
    use crate::database::postgres_store::PostgresPostStore;
    use inkzenith_core::domain::{Post, PostId};
    use inkzenith_core::error::StoreError;
    use inkzenith_core::ports::{PostQuery, PostStore};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(id: &str, title: &str) -> post::Model {
        let now = chrono::Utc::now();
        post::Model {
            id: id.to_owned(),
            title: title.to_owned(),
            image_url: None,
            content: "<p>Content</p>".to_owned(),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_get_post_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model("abc", "Test Post")]])
            .into_connection();

        let store = PostgresPostStore::new(db);

        let result: Option<Post> = store.get(&PostId::from("abc")).await.unwrap();

        let post = result.expect("post should be found");
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.id, PostId::from("abc"));
    }

    #[tokio::test]
    async fn test_query_maps_rows_in_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model("b", "Second"), model("a", "First")]])
            .into_connection();

        let store = PostgresPostStore::new(db);
        let rows = store.query(&PostQuery::first(3)).await.unwrap();

        let titles: Vec<_> = rows.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Second", "First"]);
    }

    #[tokio::test]
    async fn test_find_by_title_empty() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let store = PostgresPostStore::new(db);
        assert!(store.find_by_title("Missing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let store = PostgresPostStore::new(db);
        assert_eq!(
            store.delete(&PostId::from("gone")).await,
            Err(StoreError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let store = PostgresPostStore::new(db);
        let result = store
            .update(
                &PostId::from("gone"),
                inkzenith_core::domain::PostDraft::new("t", "c"),
            )
            .await;
        assert_eq!(result, Err(StoreError::NotFound));
    }
}
