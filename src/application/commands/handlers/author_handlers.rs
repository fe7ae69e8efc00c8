//! Author Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateAuthor, DeleteAuthor, UpdateAuthor};
use crate::application::ports::{AuthorRepositoryPort, RepositoryError};
use crate::domain::author::{Author, AuthorId};
use crate::domain::errors::DomainError;

/// CreateAuthor Handler
///
/// 邮箱唯一性采用两层设计：先 exists_by_email 预检快速失败，插入时的
/// 唯一索引冲突（预检竞态下的败者）映射到同一个 ExistData 错误。
pub struct CreateAuthorHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl CreateAuthorHandler {
    pub fn new(author_repo: Arc<dyn AuthorRepositoryPort>) -> Self {
        Self { author_repo }
    }

    pub async fn handle(&self, command: CreateAuthor) -> Result<AuthorId, DomainError> {
        if self.author_repo.exists_by_email(&command.email).await? {
            return Err(DomainError::exist_data(command.email));
        }

        let author = Author::new(command.name, command.email.clone());

        let author_id = self.author_repo.insert(&author).await.map_err(|e| match e {
            RepositoryError::Duplicate(_) => DomainError::exist_data(command.email.clone()),
            other => other.into(),
        })?;

        tracing::info!(
            author_id = %author_id,
            email = %command.email,
            "Author created"
        );

        Ok(author_id)
    }
}

/// UpdateAuthor Handler
pub struct UpdateAuthorHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl UpdateAuthorHandler {
    pub fn new(author_repo: Arc<dyn AuthorRepositoryPort>) -> Self {
        Self { author_repo }
    }

    pub async fn handle(&self, command: UpdateAuthor) -> Result<(), DomainError> {
        let mut author = self
            .author_repo
            .find_by_id(command.author_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_exist_data(format!("authorId[{}] not found", command.author_id))
            })?;

        author.update_name(&command.name)?;

        self.author_repo.update(command.author_id, &author).await?;

        tracing::info!(author_id = %command.author_id, "Author updated");

        Ok(())
    }
}

/// DeleteAuthor Handler
///
/// 删除作者时级联删除名下全部图书，两步在仓储的单事务内完成。
pub struct DeleteAuthorHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl DeleteAuthorHandler {
    pub fn new(author_repo: Arc<dyn AuthorRepositoryPort>) -> Self {
        Self { author_repo }
    }

    pub async fn handle(&self, command: DeleteAuthor) -> Result<(), DomainError> {
        let author = self
            .author_repo
            .find_by_id(command.author_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_exist_data(format!("authorId[{}] not found", command.author_id))
            })?;

        self.author_repo.delete_with_books(command.author_id).await?;

        tracing::info!(
            author_id = %command.author_id,
            name = %author.name(),
            "Author deleted with owned books"
        );

        Ok(())
    }
}
