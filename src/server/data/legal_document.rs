use chrono::Utc;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};
use uuid::Uuid;

use crate::model::outlet::CreateLegalDocumentDto;

pub struct LegalDocumentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LegalDocumentRepository<'a, C> {
    /// Creates a new instance of [`LegalDocumentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        document: &CreateLegalDocumentDto,
    ) -> Result<entity::outlet_legal_document::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::OutletLegalDocument::insert(entity::outlet_legal_document::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            fssai_number: ActiveValue::Set(document.fssai_number.clone()),
            fssai_url: ActiveValue::Set(document.fssai_url.clone()),
            pan_card_number: ActiveValue::Set(document.pan_card_number.clone()),
            pan_card_url: ActiveValue::Set(document.pan_card_url.clone()),
            gst_number: ActiveValue::Set(document.gst_number.clone()),
            on_shop_license_url: ActiveValue::Set(document.on_shop_license_url.clone()),
            off_shop_license_url: ActiveValue::Set(document.off_shop_license_url.clone()),
            bank_account_number: ActiveValue::Set(document.bank_account_number.clone()),
            bank_account_type: ActiveValue::Set(document.bank_account_type),
            bank_ifsc_code: ActiveValue::Set(document.bank_ifsc_code.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get(
        &self,
        legal_document_id: Uuid,
    ) -> Result<Option<entity::outlet_legal_document::Model>, DbErr> {
        entity::prelude::OutletLegalDocument::find_by_id(legal_document_id)
            .one(self.db)
            .await
    }
}
