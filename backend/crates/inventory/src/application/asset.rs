//! Asset Use Cases

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::non_blank;
use crate::domain::entities::{Asset, AssetWithOwner};
use crate::domain::patch::AssetPatch;
use crate::domain::repository::AssetRepository;
use crate::domain::value_objects::{
    AssetId, AssetName, AssetType, EmployeeId, FieldError, SerialNumber,
};
use crate::error::{InventoryError, InventoryResult};

/// Create asset input
pub struct CreateAssetInput {
    pub asset_name: String,
    pub serial_number: String,
    pub asset_type: String,
    pub purchase_date: Option<NaiveDate>,
    pub employee_id: Option<EmployeeId>,
}

/// Update asset input; absent or blank fields are ignored
#[derive(Default)]
pub struct UpdateAssetInput {
    pub asset_name: Option<String>,
    pub serial_number: Option<String>,
    pub asset_type: Option<String>,
    pub purchase_date: Option<NaiveDate>,
}

/// Read side of assets
pub struct AssetQueryUseCase<R>
where
    R: AssetRepository,
{
    repo: Arc<R>,
}

impl<R> AssetQueryUseCase<R>
where
    R: AssetRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> InventoryResult<Vec<AssetWithOwner>> {
        self.repo.list_with_owner().await
    }

    pub async fn get(&self, id: AssetId) -> InventoryResult<AssetWithOwner> {
        self.repo
            .find_asset(id)
            .await?
            .ok_or(InventoryError::AssetNotFound)
    }
}

/// Create asset use case
pub struct CreateAssetUseCase<R>
where
    R: AssetRepository,
{
    repo: Arc<R>,
}

impl<R> CreateAssetUseCase<R>
where
    R: AssetRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateAssetInput) -> InventoryResult<Asset> {
        let asset_name = AssetName::new(&input.asset_name)?;
        let serial_number = SerialNumber::new(&input.serial_number)?;
        let asset_type = AssetType::new(&input.asset_type)?;
        let purchase_date = input.purchase_date.ok_or(FieldError::Required {
            field: "Purchase date",
        })?;

        let asset = Asset::new(
            asset_name,
            serial_number,
            asset_type,
            purchase_date,
            input.employee_id,
        );
        self.repo.create_asset(&asset).await?;

        tracing::info!(
            asset_id = %asset.asset_id,
            serial_number = %asset.serial_number,
            "Asset created"
        );

        Ok(asset)
    }
}

/// Update asset use case
pub struct UpdateAssetUseCase<R>
where
    R: AssetRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateAssetUseCase<R>
where
    R: AssetRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: AssetId, input: UpdateAssetInput) -> InventoryResult<Asset> {
        let patch = AssetPatch {
            asset_name: non_blank(input.asset_name.as_deref(), |v| AssetName::new(v))?,
            serial_number: non_blank(input.serial_number.as_deref(), |v| SerialNumber::new(v))?,
            asset_type: non_blank(input.asset_type.as_deref(), |v| AssetType::new(v))?,
            purchase_date: input.purchase_date,
        };

        let asset = self.repo.update_asset(id, &patch).await?;

        tracing::info!(asset_id = %asset.asset_id, "Asset updated");

        Ok(asset)
    }
}

/// Assign asset use case
///
/// `None` unassigns. An employee that does not exist is a validation error
/// and leaves the current owner in place.
pub struct AssignAssetUseCase<R>
where
    R: AssetRepository,
{
    repo: Arc<R>,
}

impl<R> AssignAssetUseCase<R>
where
    R: AssetRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        id: AssetId,
        employee_id: Option<EmployeeId>,
    ) -> InventoryResult<Asset> {
        let asset = self.repo.assign_asset(id, employee_id).await?;

        match asset.employee_id {
            Some(owner) => tracing::info!(asset_id = %id, employee_id = %owner, "Asset assigned"),
            None => tracing::info!(asset_id = %id, "Asset unassigned"),
        }

        Ok(asset)
    }
}

/// Delete asset use case
pub struct DeleteAssetUseCase<R>
where
    R: AssetRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteAssetUseCase<R>
where
    R: AssetRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: AssetId) -> InventoryResult<()> {
        self.repo.delete_asset(id).await?;

        tracing::info!(asset_id = %id, "Asset deleted");

        Ok(())
    }
}
