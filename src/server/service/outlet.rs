use entity::sea_orm_active_enums::CollectionTier;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::{
    model::{
        collection::CollectionDto,
        outlet::{
            BartenderDto, CreateBartenderDto, CreateLegalDocumentDto, CreateManagerDto,
            CreateOutletDetailsDto, CreateOutletDto, CreateOutletStaffDto, LegalDocumentDto,
            LinkOutletDto, OutletDto, OutletStaffDto,
        },
        timing::TimingDto,
    },
    server::{
        data::{
            bartender::BartenderRepository, collection::CollectionRepository,
            infinity_pass::InfinityPassRepository, legal_document::LegalDocumentRepository,
            liquor::LiquorRepository, manager::ManagerRepository, outlet::OutletRepository,
            outlet_collection::OutletCollectionRepository,
            outlet_details::OutletDetailsRepository, owner::OwnerRepository,
            timing::TimingRepository, timing_slot::TimingSlotRepository,
        },
        error::{
            conflict::ConflictError, not_found::NotFoundError, validation::ValidationError, Error,
        },
        model::{
            db::OutletModel,
            expansion::{OutletExpansion, OutletRelation},
            input::NewOutlet,
        },
        service::timing::{insert_timing, validate_slots},
        util::validation::{
            field_path, validate_digits, validate_email, validate_gst, validate_ifsc,
            validate_optional_text, validate_pan, validate_phone, validate_range,
            validate_required_text, MAX_COUNTRY_LEN, MAX_NAME_LEN, MAX_URL_LEN,
        },
    },
};

const MAX_IMAGE_URLS: usize = 2;

pub fn validate_details(
    details: &CreateOutletDetailsDto,
    prefix: &str,
) -> Result<(), ValidationError> {
    validate_required_text(&details.name, &field_path(prefix, "name"), MAX_NAME_LEN)?;
    validate_required_text(&details.address, &field_path(prefix, "address"), usize::MAX)?;
    validate_phone(&details.contact_number, &field_path(prefix, "contactNumber"))?;
    validate_range(details.latitude, &field_path(prefix, "latitude"), -90.0, 90.0)?;
    validate_range(
        details.longitude,
        &field_path(prefix, "longitude"),
        -180.0,
        180.0,
    )?;
    validate_required_text(
        &details.country,
        &field_path(prefix, "country"),
        MAX_COUNTRY_LEN,
    )?;
    validate_digits(&details.pincode, &field_path(prefix, "pincode"), 6)?;

    let image_urls_field = field_path(prefix, "imageUrls");
    if details.image_urls.len() > MAX_IMAGE_URLS {
        return Err(ValidationError::new(
            image_urls_field,
            format!("At most {MAX_IMAGE_URLS} image URLs are allowed"),
        ));
    }
    for (index, url) in details.image_urls.iter().enumerate() {
        validate_required_text(url, &format!("{image_urls_field}[{index}]"), MAX_URL_LEN)?;
    }

    Ok(())
}

pub fn validate_legal_document(
    document: &CreateLegalDocumentDto,
    prefix: &str,
) -> Result<(), ValidationError> {
    validate_digits(&document.fssai_number, &field_path(prefix, "fssaiNumber"), 14)?;
    validate_gst(&document.gst_number, &field_path(prefix, "gstNumber"))?;

    if let Some(pan) = &document.pan_card_number {
        validate_pan(pan, &field_path(prefix, "panCardNumber"))?;
    }
    if let Some(account_number) = &document.bank_account_number {
        let field = field_path(prefix, "bankAccountNumber");
        let len = account_number.chars().count();
        if !(9..=30).contains(&len) {
            return Err(ValidationError::new(
                field,
                "Bank account number must be between 9 and 30 characters",
            ));
        }
    }
    if let Some(ifsc) = &document.bank_ifsc_code {
        validate_ifsc(ifsc, &field_path(prefix, "bankIfscCode"))?;
    }

    for (name, url) in [
        ("fssaiUrl", &document.fssai_url),
        ("panCardUrl", &document.pan_card_url),
        ("onShopLicenseUrl", &document.on_shop_license_url),
        ("offShopLicenseUrl", &document.off_shop_license_url),
    ] {
        validate_optional_text(url.as_deref(), &field_path(prefix, name), MAX_URL_LEN)?;
    }

    Ok(())
}

pub fn validate_manager(manager: &CreateManagerDto, prefix: &str) -> Result<(), ValidationError> {
    validate_required_text(&manager.name, &field_path(prefix, "name"), MAX_NAME_LEN)?;
    validate_phone(&manager.contact_number, &field_path(prefix, "contactNumber"))?;
    if let Some(email) = &manager.email {
        validate_email(email, &field_path(prefix, "email"))?;
    }

    Ok(())
}

pub fn validate_bartender(
    bartender: &CreateBartenderDto,
    prefix: &str,
) -> Result<(), ValidationError> {
    validate_required_text(&bartender.name, &field_path(prefix, "name"), MAX_NAME_LEN)?;
    validate_phone(&bartender.contact_number, &field_path(prefix, "contactNumber"))
}

/// Build an outlet response, loading each requested relation with a point read
///
/// Runs on any connection so callers inside a transaction see their own uncommitted
/// writes. A required relation whose row is missing means a broken foreign key and is
/// reported as [`Error::InternalError`].
pub async fn load_outlet_dto<C: ConnectionTrait>(
    db: &C,
    outlet: OutletModel,
    expansion: &OutletExpansion,
) -> Result<OutletDto, Error> {
    let missing = |what: &str, id: Uuid| {
        Error::InternalError(format!(
            "Outlet {} references {what} {id} which does not exist",
            outlet.id
        ))
    };

    let mut dto = OutletDto::from(outlet.clone());

    if expansion.contains(OutletRelation::Owner) {
        let owner = OwnerRepository::new(db)
            .get(outlet.owner_id)
            .await?
            .ok_or_else(|| missing("owner", outlet.owner_id))?;
        dto.owner = Some(owner.into());
    }

    if expansion.contains(OutletRelation::Details) {
        let details = OutletDetailsRepository::new(db)
            .get(outlet.details_id)
            .await?
            .ok_or_else(|| missing("details", outlet.details_id))?;
        dto.details = Some(details.into());
    }

    if expansion.contains(OutletRelation::LegalDocument) {
        let document = LegalDocumentRepository::new(db)
            .get(outlet.legal_document_id)
            .await?
            .ok_or_else(|| missing("legal document", outlet.legal_document_id))?;
        dto.legal_document = Some(document.into());
    }

    if expansion.contains(OutletRelation::Manager) {
        let manager = ManagerRepository::new(db)
            .get(outlet.manager_id)
            .await?
            .ok_or_else(|| missing("manager", outlet.manager_id))?;
        dto.manager = Some(manager.into());
    }

    if expansion.contains(OutletRelation::Bartender) {
        if let Some(bartender_id) = outlet.bartender_id {
            let bartender = BartenderRepository::new(db)
                .get(bartender_id)
                .await?
                .ok_or_else(|| missing("bartender", bartender_id))?;
            dto.bartender = Some(bartender.into());
        }
    }

    if expansion.contains(OutletRelation::Timing) {
        let timing = TimingRepository::new(db)
            .get(outlet.timing_id)
            .await?
            .ok_or_else(|| missing("timing", outlet.timing_id))?;
        let slots = TimingSlotRepository::new(db)
            .find_by_timing(timing.id)
            .await?;
        dto.timing = Some(TimingDto::new(timing, slots));
    }

    if expansion.contains(OutletRelation::Collections) {
        let collection_repo = CollectionRepository::new(db);
        let liquor_repo = LiquorRepository::new(db);

        let assignments = OutletCollectionRepository::new(db)
            .find_by_outlet(outlet.id)
            .await?;

        for assignment in assignments {
            let collection = collection_repo
                .get(assignment.collection_id)
                .await?
                .ok_or_else(|| missing("collection", assignment.collection_id))?;
            let liquors = liquor_repo.find_by_collection(collection.id).await?;
            let collection = Some(CollectionDto::new(collection, liquors));

            match assignment.tier {
                CollectionTier::Gold => dto.gold_collection = collection,
                CollectionTier::Silver => dto.silver_collection = collection,
                CollectionTier::Crystal => dto.crystal_collection = collection,
            }
        }
    }

    if expansion.contains(OutletRelation::InfinityPass) {
        if let Some(infinity_pass_id) = outlet.infinity_pass_id {
            let pass = InfinityPassRepository::new(db)
                .get(infinity_pass_id)
                .await?
                .ok_or_else(|| missing("infinity pass", infinity_pass_id))?;
            dto.infinity_pass = Some(pass.into());
        }
    }

    Ok(dto)
}

pub struct OutletService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OutletService<'a> {
    /// Creates a new instance of [`OutletService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create an outlet together with all of its parts
    ///
    /// Every sub-payload is validated before the transaction opens. Details, legal document,
    /// manager, timing with its slots, the optional bartender and the outlet row are then
    /// written in one transaction, so a failure at any step leaves none of them behind.
    ///
    /// # Returns
    /// - `Ok(OutletDto)` - The unverified outlet with its new parts expanded
    /// - `Err(Error::ValidationError)` - A field of any sub-payload is invalid
    /// - `Err(Error::NotFoundError)` - The owner does not exist
    /// - `Err(Error::DbErr)` - The transaction failed and was rolled back
    pub async fn create_outlet(&self, outlet: CreateOutletDto) -> Result<OutletDto, Error> {
        validate_required_text(&outlet.name, "name", MAX_NAME_LEN)?;
        validate_details(&outlet.details, "details")?;
        validate_legal_document(&outlet.legal_document, "legalDocument")?;
        validate_manager(&outlet.manager, "manager")?;
        if let Some(bartender) = &outlet.bartender {
            validate_bartender(bartender, "bartender")?;
        }
        let slots = validate_slots(&outlet.timing.slots, "timing")?;

        let txn = self.db.begin().await?;

        if OwnerRepository::new(&txn)
            .get(outlet.owner_id)
            .await?
            .is_none()
        {
            return Err(NotFoundError::Owner(outlet.owner_id).into());
        }

        let details = OutletDetailsRepository::new(&txn)
            .create(&outlet.details)
            .await?;
        let legal_document = LegalDocumentRepository::new(&txn)
            .create(&outlet.legal_document)
            .await?;
        let manager = ManagerRepository::new(&txn)
            .create(&outlet.manager)
            .await?;
        let (timing, slots) = insert_timing(
            &txn,
            outlet.timing.establishment_type,
            outlet.timing.hotel_stay,
            outlet.timing.event_space,
            &slots,
        )
        .await?;
        let bartender = match &outlet.bartender {
            Some(bartender) => Some(BartenderRepository::new(&txn).create(bartender).await?),
            None => None,
        };

        let created = OutletRepository::new(&txn)
            .create(NewOutlet {
                owner_id: outlet.owner_id,
                name: Some(outlet.name),
                details_id: details.id,
                legal_document_id: legal_document.id,
                manager_id: manager.id,
                timing_id: timing.id,
                bartender_id: bartender.as_ref().map(|b| b.id),
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            outlet_id = %created.id,
            owner_id = %created.owner_id,
            "Created outlet"
        );

        let mut dto = OutletDto::from(created);
        dto.details = Some(details.into());
        dto.legal_document = Some(legal_document.into());
        dto.manager = Some(manager.into());
        dto.bartender = bartender.map(BartenderDto::from);
        dto.timing = Some(TimingDto::new(timing, slots));

        Ok(dto)
    }

    /// Create an outlet from parts that already exist
    ///
    /// Each referenced ID is checked in turn (bartender, details, legal document, manager,
    /// timing, owner) and the first missing one is reported by name. A part that already
    /// belongs to another outlet is a conflict.
    pub async fn link_outlet(&self, outlet: LinkOutletDto) -> Result<OutletDto, Error> {
        validate_optional_text(outlet.name.as_deref(), "name", MAX_NAME_LEN)?;

        let txn = self.db.begin().await?;

        if let Some(bartender_id) = outlet.bartender_id {
            if BartenderRepository::new(&txn)
                .get(bartender_id)
                .await?
                .is_none()
            {
                return Err(NotFoundError::Bartender(bartender_id).into());
            }
        }
        if OutletDetailsRepository::new(&txn)
            .get(outlet.details_id)
            .await?
            .is_none()
        {
            return Err(NotFoundError::OutletDetails(outlet.details_id).into());
        }
        if LegalDocumentRepository::new(&txn)
            .get(outlet.legal_document_id)
            .await?
            .is_none()
        {
            return Err(NotFoundError::LegalDocument(outlet.legal_document_id).into());
        }
        if ManagerRepository::new(&txn)
            .get(outlet.manager_id)
            .await?
            .is_none()
        {
            return Err(NotFoundError::Manager(outlet.manager_id).into());
        }
        if TimingRepository::new(&txn)
            .get(outlet.timing_id)
            .await?
            .is_none()
        {
            return Err(NotFoundError::Timing(outlet.timing_id).into());
        }
        if OwnerRepository::new(&txn)
            .get(outlet.owner_id)
            .await?
            .is_none()
        {
            return Err(NotFoundError::Owner(outlet.owner_id).into());
        }

        let created = OutletRepository::new(&txn)
            .create(NewOutlet {
                owner_id: outlet.owner_id,
                name: outlet.name,
                details_id: outlet.details_id,
                legal_document_id: outlet.legal_document_id,
                manager_id: outlet.manager_id,
                timing_id: outlet.timing_id,
                bartender_id: outlet.bartender_id,
            })
            .await
            .map_err(|err| Error::on_unique_violation(err, ConflictError::PartAlreadyLinked))?;

        txn.commit().await?;

        tracing::info!(
            outlet_id = %created.id,
            owner_id = %created.owner_id,
            "Linked outlet from existing parts"
        );

        Ok(created.into())
    }

    /// Fetch an outlet with the requested relations expanded
    pub async fn get_outlet(
        &self,
        outlet_id: Uuid,
        expansion: &OutletExpansion,
    ) -> Result<OutletDto, Error> {
        let outlet = match OutletRepository::new(self.db).get(outlet_id).await? {
            Some(outlet) => outlet,
            None => return Err(NotFoundError::Outlet(outlet_id).into()),
        };

        load_outlet_dto(self.db, outlet, expansion).await
    }

    /// Create details, manager and an optional bartender ahead of linking an outlet
    pub async fn create_staff(&self, staff: CreateOutletStaffDto) -> Result<OutletStaffDto, Error> {
        validate_details(&staff.details, "details")?;
        validate_manager(&staff.manager, "manager")?;
        if let Some(bartender) = &staff.bartender {
            validate_bartender(bartender, "bartender")?;
        }

        let txn = self.db.begin().await?;

        let details = OutletDetailsRepository::new(&txn)
            .create(&staff.details)
            .await?;
        let manager = ManagerRepository::new(&txn).create(&staff.manager).await?;
        let bartender = match &staff.bartender {
            Some(bartender) => Some(BartenderRepository::new(&txn).create(bartender).await?),
            None => None,
        };

        txn.commit().await?;

        tracing::info!(details_id = %details.id, manager_id = %manager.id, "Created outlet details");

        Ok(OutletStaffDto {
            details: details.into(),
            manager: manager.into(),
            bartender: bartender.map(BartenderDto::from),
        })
    }

    pub async fn create_legal_document(
        &self,
        document: CreateLegalDocumentDto,
    ) -> Result<LegalDocumentDto, Error> {
        validate_legal_document(&document, "")?;

        let document = LegalDocumentRepository::new(self.db)
            .create(&document)
            .await?;

        tracing::info!(legal_document_id = %document.id, "Created legal document");

        Ok(document.into())
    }
}
