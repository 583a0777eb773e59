//! PostgreSQL document store.

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Select, Set,
};
use uuid::Uuid;

use inkzenith_core::domain::{Post, PostDraft, PostId};
use inkzenith_core::error::StoreError;
use inkzenith_core::ports::{PostQuery, PostStore, StartPosition};

use super::entity::post::{self, Entity as PostEntity};

/// Post collection stored in the `posts` table.
pub struct PostgresPostStore {
    db: DbConn,
}

impl PostgresPostStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// Base select in listing order: newest first, id descending on ties.
    fn listing() -> Select<PostEntity> {
        PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
    }
}

/// Rows on or past `start` in listing order.
fn start_condition(start: &StartPosition) -> Condition {
    let (boundary, inclusive) = match start {
        StartPosition::After(b) => (b, false),
        StartPosition::At(b) => (b, true),
    };
    let created_at: sea_orm::prelude::DateTimeWithTimeZone = boundary.created_at.into();
    let id = boundary.id.to_string();

    let same_instant = Condition::all()
        .add(post::Column::CreatedAt.eq(created_at))
        .add(if inclusive {
            post::Column::Id.lte(id)
        } else {
            post::Column::Id.lt(id)
        });

    Condition::any()
        .add(post::Column::CreatedAt.lt(created_at))
        .add(same_instant)
}

/// Timestamp for a write that must land strictly after `previous`.
fn stamp_after(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + TimeDelta::microseconds(1)
    }
}

fn query_error(e: DbErr) -> StoreError {
    match e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => StoreError::Connection(e.to_string()),
        DbErr::RecordNotFound(_) => StoreError::NotFound,
        other => {
            let err_str = other.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                StoreError::Constraint("Post already exists".to_string())
            } else {
                StoreError::Query(err_str)
            }
        }
    }
}

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn query(&self, query: &PostQuery) -> Result<Vec<Post>, StoreError> {
        let mut select = Self::listing();
        if let Some(start) = &query.start {
            select = select.filter(start_condition(start));
        }
        if let Some(limit) = query.limit {
            select = select.limit(limit as u64);
        }

        let rows = select.all(&self.db).await.map_err(query_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_title(&self, title: &str) -> Result<Vec<Post>, StoreError> {
        tracing::debug!(title = %title, "Finding posts by title");

        let rows = Self::listing()
            .filter(post::Column::Title.eq(title))
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get(&self, id: &PostId) -> Result<Option<Post>, StoreError> {
        let result = PostEntity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, draft: PostDraft) -> Result<Post, StoreError> {
        let now = Utc::now();
        let post = Post {
            id: PostId::new(Uuid::new_v4().simple().to_string()),
            title: draft.title,
            image_url: draft.image_url,
            content: draft.content,
            created_at: now,
            updated_at: now,
        };

        let active: post::ActiveModel = post.into();
        let model = active.insert(&self.db).await.map_err(query_error)?;
        Ok(model.into())
    }

    async fn update(&self, id: &PostId, draft: PostDraft) -> Result<Post, StoreError> {
        let current = PostEntity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(query_error)?
            .ok_or(StoreError::NotFound)?;

        let previous: DateTime<Utc> = current.updated_at.into();
        let mut active: post::ActiveModel = current.into();
        active.title = Set(draft.title);
        active.image_url = Set(draft.image_url);
        active.content = Set(draft.content);
        active.updated_at = Set(stamp_after(previous).into());

        let model = active.update(&self.db).await.map_err(query_error)?;
        Ok(model.into())
    }

    async fn delete(&self, id: &PostId) -> Result<(), StoreError> {
        let result = PostEntity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
