//! SeaORM implementation of CategoryRepository

use async_trait::async_trait;
use log::info;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Set,
};

use crate::domain::{
    Category, CategoryChanges, CategoryFilter, CategoryRepository, NewCategory,
};
use crate::infrastructure::database::entities::category;
use crate::shared::types::{PageBounds, StorageResult};

fn entity_to_domain(model: category::Model) -> Category {
    Category {
        id: model.id,
        name: model.name,
    }
}

fn apply_filter(
    mut query: Select<category::Entity>,
    filter: &CategoryFilter,
) -> Select<category::Entity> {
    if let Some(name) = &filter.name_contains {
        query = query.filter(category::Column::Name.contains(name));
    }
    if let Some(name) = &filter.name_equals {
        query = query.filter(category::Column::Name.eq(name));
    }
    if let Some(id) = filter.exclude_id {
        query = query.filter(category::Column::Id.ne(id));
    }
    query
}

pub struct SeaOrmCategoryRepository {
    db: DatabaseConnection,
}

impl SeaOrmCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn find_matching(
        &self,
        filter: &CategoryFilter,
        bounds: PageBounds,
    ) -> StorageResult<Vec<Category>> {
        // LIMIT 0 must mean "no rows", not "no limit".
        if bounds.limit == 0 {
            return Ok(Vec::new());
        }

        let models = apply_filter(category::Entity::find(), filter)
            .order_by_asc(category::Column::Id)
            .offset(bounds.offset)
            .limit(bounds.limit)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn count_matching(&self, filter: &CategoryFilter) -> StorageResult<u64> {
        Ok(apply_filter(category::Entity::find(), filter)
            .count(&self.db)
            .await?)
    }

    async fn find_by_id(&self, id: i64) -> StorageResult<Option<Category>> {
        let model = category::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(entity_to_domain))
    }

    async fn exists_by_id(&self, id: i64) -> StorageResult<bool> {
        Ok(category::Entity::find_by_id(id)
            .count(&self.db)
            .await?
            > 0)
    }

    async fn insert(&self, input: NewCategory) -> StorageResult<Category> {
        let model = category::ActiveModel {
            id: NotSet,
            name: Set(input.name),
        };
        let result = model.insert(&self.db).await?;
        info!("Category created: {} ({})", result.name, result.id);
        Ok(entity_to_domain(result))
    }

    async fn update_fields(
        &self,
        id: i64,
        changes: CategoryChanges,
    ) -> StorageResult<Option<Category>> {
        let Some(existing) = category::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut model: category::ActiveModel = existing.into();
        model.name = Set(changes.name);
        let updated = model.update(&self.db).await?;
        Ok(Some(entity_to_domain(updated)))
    }

    async fn delete_by_id(&self, id: i64) -> StorageResult<bool> {
        let result = category::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected > 0 {
            info!("Category deleted: {}", id);
        }
        Ok(result.rows_affected > 0)
    }
}
