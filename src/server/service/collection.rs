use entity::sea_orm_active_enums::CollectionTier;
use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::{
    model::{
        collection::{AttachCollectionsDto, CollectionDto, CreateCollectionDto, OutletCollectionDto},
        outlet::OutletDto,
    },
    server::{
        data::{
            collection::CollectionRepository, liquor::LiquorRepository, outlet::OutletRepository,
            outlet_collection::OutletCollectionRepository,
        },
        error::{
            conflict::ConflictError, not_found::NotFoundError, validation::ValidationError, Error,
        },
        model::{
            expansion::{OutletExpansion, OutletRelation},
            input::{NewCollection, NewLiquor},
        },
        service::outlet::load_outlet_dto,
        util::validation::{
            validate_non_negative, validate_optional_text, validate_positive,
            validate_required_text, MAX_NAME_LEN,
        },
    },
};

/// Validate a collection submission and its liquor line items
///
/// # Returns
/// - `Ok(NewCollection)` - The collection with every liquor item complete
/// - `Err(ValidationError)` - The first rule that failed
pub fn validate_collection(collection: &CreateCollectionDto) -> Result<NewCollection, ValidationError> {
    validate_positive(collection.pegs_per_day, "pegsPerDay")?;
    validate_non_negative(collection.booking_price, "bookingPrice")?;
    validate_optional_text(collection.label_one.as_deref(), "labelOne", MAX_NAME_LEN)?;
    validate_optional_text(collection.label_two.as_deref(), "labelTwo", MAX_NAME_LEN)?;

    if collection.start_date > collection.end_date {
        return Err(ValidationError::new(
            "endDate",
            "Start date must be on or before end date",
        ));
    }

    if collection.liquors.is_empty() {
        return Err(ValidationError::new(
            "liquors",
            "Collection must contain at least one liquor item",
        ));
    }

    let mut liquors = Vec::with_capacity(collection.liquors.len());
    for (index, liquor) in collection.liquors.iter().enumerate() {
        let field = format!("liquors[{index}]");

        let (category, starting_price, brand_names) = match (
            &liquor.category,
            liquor.starting_price,
            &liquor.brand_names,
        ) {
            (Some(category), Some(starting_price), Some(brand_names))
                if !brand_names.is_empty() =>
            {
                (category, starting_price, brand_names)
            }
            _ => {
                return Err(ValidationError::new(
                    field,
                    "Each liquor must have brandNames, category, and startingPrice",
                ))
            }
        };

        validate_required_text(category, &format!("{field}.category"), MAX_NAME_LEN)?;
        validate_positive(starting_price, &format!("{field}.startingPrice"))?;
        for (brand_index, brand_name) in brand_names.iter().enumerate() {
            validate_required_text(
                brand_name,
                &format!("{field}.brandNames[{brand_index}]"),
                MAX_NAME_LEN,
            )?;
        }

        liquors.push(NewLiquor {
            category: category.clone(),
            starting_price,
            brand_names: brand_names.clone(),
        });
    }

    Ok(NewCollection {
        tier: collection.tier,
        pegs_per_day: collection.pegs_per_day,
        label_one: collection.label_one.clone(),
        label_two: collection.label_two.clone(),
        start_date: collection.start_date,
        end_date: collection.end_date,
        booking_price: collection.booking_price,
        liquors,
    })
}

/// Request field naming the collection for a tier
fn tier_field(tier: CollectionTier) -> &'static str {
    match tier {
        CollectionTier::Gold => "goldCollectionId",
        CollectionTier::Silver => "silverCollectionId",
        CollectionTier::Crystal => "crystalCollectionId",
    }
}

pub struct CollectionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CollectionService<'a> {
    /// Creates a new instance of [`CollectionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a collection and its liquor items in one transaction
    pub async fn create_collection(
        &self,
        collection: CreateCollectionDto,
    ) -> Result<CollectionDto, Error> {
        let collection = validate_collection(&collection)?;

        let txn = self.db.begin().await?;

        let created = CollectionRepository::new(&txn).create(&collection).await?;
        let liquors = LiquorRepository::new(&txn)
            .create_many(created.id, &collection.liquors)
            .await?;

        txn.commit().await?;

        tracing::info!(
            collection_id = %created.id,
            tier = %created.tier,
            liquors = liquors.len(),
            "Created collection"
        );

        Ok(CollectionDto::new(created, liquors))
    }

    pub async fn get_collection(&self, collection_id: Uuid) -> Result<CollectionDto, Error> {
        let collection = match CollectionRepository::new(self.db).get(collection_id).await? {
            Some(collection) => collection,
            None => return Err(NotFoundError::Collection(collection_id).into()),
        };

        let liquors = LiquorRepository::new(self.db)
            .find_by_collection(collection.id)
            .await?;

        Ok(CollectionDto::new(collection, liquors))
    }

    /// Attach existing collections to empty tiers of an outlet
    ///
    /// All requested tiers must currently be empty. If any is filled the whole request is
    /// rejected and nothing is written. Each collection must exist and be of the tier it is
    /// attached to. A concurrent attach that fills a tier first surfaces as the primary key
    /// violation on `(outlet_id, tier)`, reported as the same conflict.
    ///
    /// # Returns
    /// - `Ok(OutletDto)` - The outlet with its collections expanded
    /// - `Err(Error::ValidationError)` - No tier requested, or a collection of the wrong tier
    /// - `Err(Error::NotFoundError)` - Outlet or a collection does not exist
    /// - `Err(Error::ConflictError)` - A requested tier is already filled
    pub async fn attach_collections(
        &self,
        outlet_id: Uuid,
        request: AttachCollectionsDto,
    ) -> Result<OutletDto, Error> {
        let requested = request.requested();
        if requested.is_empty() {
            return Err(ValidationError::new(
                "collections",
                "At least one of goldCollectionId, silverCollectionId or crystalCollectionId is required",
            )
            .into());
        }

        let txn = self.db.begin().await?;
        let outlet_repo = OutletRepository::new(&txn);
        let collection_repo = CollectionRepository::new(&txn);
        let assignment_repo = OutletCollectionRepository::new(&txn);

        let outlet = match outlet_repo.get(outlet_id).await? {
            Some(outlet) => outlet,
            None => return Err(NotFoundError::Outlet(outlet_id).into()),
        };

        let assigned = assignment_repo.find_by_outlet(outlet_id).await?;
        if let Some((tier, _)) = requested
            .iter()
            .find(|(tier, _)| assigned.iter().any(|a| a.tier == *tier))
        {
            return Err(ConflictError::TierAlreadyAssigned(*tier).into());
        }

        for (tier, collection_id) in &requested {
            let collection = match collection_repo.get(*collection_id).await? {
                Some(collection) => collection,
                None => return Err(NotFoundError::Collection(*collection_id).into()),
            };

            if collection.tier != *tier {
                return Err(ValidationError::new(
                    tier_field(*tier),
                    format!(
                        "Collection is a {} collection and cannot fill the {} tier",
                        collection.tier, tier
                    ),
                )
                .into());
            }
        }

        for (tier, collection_id) in &requested {
            assignment_repo
                .create(outlet_id, *tier, *collection_id)
                .await
                .map_err(|err| {
                    Error::on_unique_violation(err, ConflictError::TierAlreadyAssigned(*tier))
                })?;
        }

        let expansion = OutletExpansion::none().with(OutletRelation::Collections);
        let dto = load_outlet_dto(&txn, outlet, &expansion).await?;

        txn.commit().await?;

        for (tier, collection_id) in &requested {
            tracing::info!(
                outlet_id = %outlet_id,
                collection_id = %collection_id,
                tier = %tier,
                "Attached collection to outlet tier"
            );
        }

        Ok(dto)
    }

    /// Fetch an outlet together with the collection it holds for one tier
    ///
    /// A missing outlet and an empty tier are both not found, with distinct messages.
    pub async fn get_outlet_collection(
        &self,
        outlet_id: Uuid,
        tier: CollectionTier,
    ) -> Result<OutletCollectionDto, Error> {
        let outlet = match OutletRepository::new(self.db).get(outlet_id).await? {
            Some(outlet) => outlet,
            None => return Err(NotFoundError::Outlet(outlet_id).into()),
        };

        let assignment = match OutletCollectionRepository::new(self.db)
            .get(outlet_id, tier)
            .await?
        {
            Some(assignment) => assignment,
            None => return Err(NotFoundError::TierCollection { outlet_id, tier }.into()),
        };

        let collection = CollectionRepository::new(self.db)
            .get(assignment.collection_id)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Outlet {outlet_id} {tier} tier references missing collection {}",
                    assignment.collection_id
                ))
            })?;
        let liquors = LiquorRepository::new(self.db)
            .find_by_collection(collection.id)
            .await?;

        Ok(OutletCollectionDto {
            outlet: outlet.into(),
            collection: CollectionDto::new(collection, liquors),
        })
    }
}
