//! SeaORM implementation of ProductRepository

use async_trait::async_trait;
use log::info;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Set,
};

use crate::domain::{NewProduct, Product, ProductChanges, ProductFilter, ProductRepository};
use crate::infrastructure::database::entities::product;
use crate::shared::types::{PageBounds, StorageResult};

fn entity_to_domain(model: product::Model) -> Product {
    Product {
        id: model.id,
        name: model.name,
        price: model.price,
        category_id: model.category_id,
        category: None,
    }
}

fn apply_filter(
    mut query: Select<product::Entity>,
    filter: &ProductFilter,
) -> Select<product::Entity> {
    if let Some(name) = &filter.name_contains {
        // Name matching uses the store's native LIKE semantics.
        query = query.filter(product::Column::Name.contains(name));
    }
    if !filter.category_ids.is_empty() {
        query = query.filter(product::Column::CategoryId.is_in(filter.category_ids.clone()));
    }
    if let Some(name) = &filter.name_equals {
        query = query.filter(product::Column::Name.eq(name));
    }
    if let Some(id) = filter.exclude_id {
        query = query.filter(product::Column::Id.ne(id));
    }
    query
}

pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn find_matching(
        &self,
        filter: &ProductFilter,
        bounds: PageBounds,
    ) -> StorageResult<Vec<Product>> {
        // LIMIT 0 must mean "no rows", not "no limit".
        if bounds.limit == 0 {
            return Ok(Vec::new());
        }

        let models = apply_filter(product::Entity::find(), filter)
            .order_by_asc(product::Column::Id)
            .offset(bounds.offset)
            .limit(bounds.limit)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn count_matching(&self, filter: &ProductFilter) -> StorageResult<u64> {
        Ok(apply_filter(product::Entity::find(), filter)
            .count(&self.db)
            .await?)
    }

    async fn find_by_id(&self, id: i64) -> StorageResult<Option<Product>> {
        let model = product::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(entity_to_domain))
    }

    async fn exists_by_id(&self, id: i64) -> StorageResult<bool> {
        Ok(product::Entity::find_by_id(id).count(&self.db).await? > 0)
    }

    async fn insert(&self, input: NewProduct) -> StorageResult<Product> {
        let model = product::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            price: Set(input.price),
            category_id: Set(input.category_id),
        };
        let result = model.insert(&self.db).await?;
        info!("Product created: {} ({})", result.name, result.id);
        Ok(entity_to_domain(result))
    }

    async fn update_fields(
        &self,
        id: i64,
        changes: ProductChanges,
    ) -> StorageResult<Option<Product>> {
        let Some(existing) = product::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut model: product::ActiveModel = existing.into();
        model.name = Set(changes.name);
        model.price = Set(changes.price);
        model.category_id = Set(changes.category_id);
        let updated = model.update(&self.db).await?;
        Ok(Some(entity_to_domain(updated)))
    }

    async fn delete_by_id(&self, id: i64) -> StorageResult<bool> {
        let result = product::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected > 0 {
            info!("Product deleted: {}", id);
        }
        Ok(result.rows_affected > 0)
    }
}
