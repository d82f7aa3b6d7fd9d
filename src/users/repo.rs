use sqlx::SqliteConnection;

use crate::users::dto::UserPayload;
use crate::users::repo_types::User;

impl User {
    /// Insert a new row; sqlite assigns the id.
    pub async fn create(conn: &mut SqliteConnection, payload: &UserPayload) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO "user" (username, email, password)
            VALUES (?, ?, ?)
            RETURNING id, username, email, password
            "#,
        )
        .bind(&payload.username)
        .bind(&payload.email)
        .bind(&payload.password)
        .fetch_one(conn)
        .await
    }

    /// Every row, in insertion order.
    pub async fn list(conn: &mut SqliteConnection) -> sqlx::Result<Vec<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password
            FROM "user"
            ORDER BY id
            "#,
        )
        .fetch_all(conn)
        .await
    }

    /// Overwrite all fields of row `id`. `None` when no such row exists.
    pub async fn update(
        conn: &mut SqliteConnection,
        id: i64,
        payload: &UserPayload,
    ) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE "user"
               SET username = ?, email = ?, password = ?
             WHERE id = ?
            RETURNING id, username, email, password
            "#,
        )
        .bind(&payload.username)
        .bind(&payload.email)
        .bind(&payload.password)
        .bind(id)
        .fetch_optional(conn)
        .await
    }

    /// Remove row `id`. Returns whether a row was removed.
    pub async fn delete(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<bool> {
        let result = sqlx::query(r#"DELETE FROM "user" WHERE id = ?"#)
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
