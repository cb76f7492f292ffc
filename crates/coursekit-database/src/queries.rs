//! Database query operations for coursekit

use crate::models::{ContentDb, CourseDb};
use coursekit_core::{Error, NewContent, NewCourse, Result};
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Filter for listing contents of a course
#[derive(Debug, Clone, Copy)]
pub struct ContentFilter {
    /// Owning course
    pub course_id: Uuid,
    /// Maximum number of rows
    pub limit: i64,
    /// Pagination offset
    pub offset: i64,
}

/// Course database operations
pub struct CourseQueries;

impl CourseQueries {
    /// Insert a new course
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn insert(pool: &PgPool, course: &NewCourse) -> Result<CourseDb> {
        let query = r"
            INSERT INTO courses (name, category, tagline, thumbnail)
            VALUES ($1, $2, $3, $4)
            RETURNING *
        ";

        sqlx::query_as::<_, CourseDb>(query)
            .bind(&course.name)
            .bind(&course.category)
            .bind(&course.tagline)
            .bind(&course.thumbnail)
            .fetch_one(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Find a course by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or the course is not found.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<CourseDb> {
        let query = "SELECT * FROM courses WHERE id = $1";

        sqlx::query_as::<_, CourseDb>(query)
            .bind(id)
            .fetch_one(pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => Error::NotFound {
                    resource: format!("Course with ID {id}"),
                },
                _ => Error::Database(e.to_string()),
            })
    }

    /// List courses with pagination, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<CourseDb>> {
        let query = r"
            SELECT * FROM courses
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
        ";

        sqlx::query_as::<_, CourseDb>(query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Count all courses
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(pool: &PgPool) -> Result<i64> {
        let query = "SELECT COUNT(*) as count FROM courses";

        let row = sqlx::query(query)
            .fetch_one(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(row.get("count"))
    }

    /// Delete a course and, through the cascade, its contents
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or the course is not found.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<()> {
        let query = "DELETE FROM courses WHERE id = $1";

        let result = sqlx::query(query)
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound {
                resource: format!("Course with ID {id}"),
            });
        }

        Ok(())
    }
}

/// Course content database operations
pub struct ContentQueries;

impl ContentQueries {
    /// Insert a new content record
    ///
    /// The row id is generated server-side. A missing owning course surfaces
    /// as a not-found error rather than a raw constraint violation.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or the course is missing.
    pub async fn insert(pool: &PgPool, content: &NewContent) -> Result<ContentDb> {
        let query = r"
            INSERT INTO course_contents (course_id, title, content_type, youtube_id, text)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
        ";

        sqlx::query_as::<_, ContentDb>(query)
            .bind(content.course_id)
            .bind(&content.title)
            .bind(content.content_type.to_string())
            .bind(&content.youtube_id)
            .bind(&content.text)
            .fetch_one(pool)
            .await
            .map_err(|e| map_course_fk(e, content.course_id))
    }

    /// Update an existing content record
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or the record is not found.
    pub async fn update(pool: &PgPool, id: Uuid, content: &NewContent) -> Result<ContentDb> {
        let query = r"
            UPDATE course_contents
            SET title = $1,
                content_type = $2,
                youtube_id = $3,
                text = $4,
                updated_at = NOW()
            WHERE id = $5
            RETURNING *
        ";

        sqlx::query_as::<_, ContentDb>(query)
            .bind(&content.title)
            .bind(content.content_type.to_string())
            .bind(&content.youtube_id)
            .bind(&content.text)
            .bind(id)
            .fetch_one(pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => Error::NotFound {
                    resource: format!("Content with ID {id}"),
                },
                _ => Error::Database(e.to_string()),
            })
    }

    /// Find a content record by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or the record is not found.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<ContentDb> {
        let query = "SELECT * FROM course_contents WHERE id = $1";

        sqlx::query_as::<_, ContentDb>(query)
            .bind(id)
            .fetch_one(pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => Error::NotFound {
                    resource: format!("Content with ID {id}"),
                },
                _ => Error::Database(e.to_string()),
            })
    }

    /// List contents of a course with pagination, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_by_course(pool: &PgPool, filter: ContentFilter) -> Result<Vec<ContentDb>> {
        let query = r"
            SELECT * FROM course_contents
            WHERE course_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
        ";

        tracing::debug!(
            "Listing contents for course {} with limit={}, offset={}",
            filter.course_id,
            filter.limit,
            filter.offset
        );

        sqlx::query_as::<_, ContentDb>(query)
            .bind(filter.course_id)
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(pool)
            .await
            .map_err(|e| {
                tracing::error!("Database query error listing contents: {}", e);
                Error::Database(e.to_string())
            })
    }

    /// Count contents of a course
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count_by_course(pool: &PgPool, course_id: Uuid) -> Result<i64> {
        let query = "SELECT COUNT(*) as count FROM course_contents WHERE course_id = $1";

        let row = sqlx::query(query)
            .bind(course_id)
            .fetch_one(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(row.get("count"))
    }

    /// Delete a content record
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or the record is not found.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<()> {
        let query = "DELETE FROM course_contents WHERE id = $1";

        let result = sqlx::query(query)
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound {
                resource: format!("Content with ID {id}"),
            });
        }

        Ok(())
    }
}

/// Map a foreign key violation on the owning course to a not-found error
fn map_course_fk(e: sqlx::Error, course_id: Uuid) -> Error {
    let is_fk_violation = e
        .as_database_error()
        .and_then(|db_error| db_error.constraint())
        .is_some_and(|constraint| constraint == "course_contents_course_id_fkey");

    if is_fk_violation {
        Error::NotFound {
            resource: format!("Course with ID {course_id}"),
        }
    } else {
        Error::Database(e.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn test_content_filter_construction() {
        let filter = ContentFilter {
            course_id: Uuid::new_v4(),
            limit: 50,
            offset: 0,
        };

        assert_eq!(filter.limit, 50);
        assert_eq!(filter.offset, 0);
    }

    #[test]
    fn test_map_course_fk_passes_through_other_errors() {
        let course_id = Uuid::new_v4();
        let error = map_course_fk(sqlx::Error::RowNotFound, course_id);

        match error {
            Error::Database(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected Database error"),
        }
    }
}
