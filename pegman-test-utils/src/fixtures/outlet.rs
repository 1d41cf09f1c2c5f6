use chrono::{NaiveTime, Utc};
use entity::{
    json::{DayList, StringList},
    sea_orm_active_enums::{BankAccountType, DayOfWeek, EstablishmentType},
};
use sea_orm::{ActiveValue, EntityTrait};
use uuid::Uuid;

use crate::{error::TestError, fixtures::factory::time, TestContext};

impl TestContext {
    pub fn outlet(&self) -> OutletFixtures<'_> {
        OutletFixtures { setup: self }
    }
}

pub struct OutletFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> OutletFixtures<'a> {
    pub async fn insert_details(&self) -> Result<entity::outlet_details::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::OutletDetails::insert(entity::outlet_details::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                name: ActiveValue::Set("The Tipsy Tap".to_string()),
                address: ActiveValue::Set("12 MG Road".to_string()),
                contact_number: ActiveValue::Set("9876543210".to_string()),
                latitude: ActiveValue::Set(12.9716),
                longitude: ActiveValue::Set(77.5946),
                country: ActiveValue::Set("India".to_string()),
                pincode: ActiveValue::Set("560001".to_string()),
                image_urls: ActiveValue::Set(StringList(vec![
                    "https://cdn.example.com/outlet.jpg".to_string(),
                ])),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_legal_document(
        &self,
    ) -> Result<entity::outlet_legal_document::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::OutletLegalDocument::insert(
            entity::outlet_legal_document::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                fssai_number: ActiveValue::Set("12345678901234".to_string()),
                fssai_url: ActiveValue::Set(None),
                pan_card_number: ActiveValue::Set(Some("ABCDE1234F".to_string())),
                pan_card_url: ActiveValue::Set(None),
                gst_number: ActiveValue::Set("29ABCDE1234F1Z5".to_string()),
                on_shop_license_url: ActiveValue::Set(None),
                off_shop_license_url: ActiveValue::Set(None),
                bank_account_number: ActiveValue::Set(Some("123456789012".to_string())),
                bank_account_type: ActiveValue::Set(BankAccountType::Savings),
                bank_ifsc_code: ActiveValue::Set(Some("HDFC0001234".to_string())),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_manager(&self) -> Result<entity::outlet_manager::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::OutletManager::insert(entity::outlet_manager::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                name: ActiveValue::Set("Test Manager".to_string()),
                contact_number: ActiveValue::Set("9876501234".to_string()),
                email: ActiveValue::Set(Some("manager@example.com".to_string())),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_bartender(&self) -> Result<entity::outlet_bartender::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::OutletBartender::insert(entity::outlet_bartender::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                name: ActiveValue::Set("Test Bartender".to_string()),
                contact_number: ActiveValue::Set("9876504321".to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a timing record with one slot per provided `(day, opening, closing)` entry.
    pub async fn insert_timing(
        &self,
        slots: &[(DayOfWeek, NaiveTime, NaiveTime)],
    ) -> Result<
        (
            entity::outlet_timing::Model,
            Vec<entity::outlet_timing_slot::Model>,
        ),
        TestError,
    > {
        let now = Utc::now().naive_utc();

        let timing =
            entity::prelude::OutletTiming::insert(entity::outlet_timing::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                establishment_type: ActiveValue::Set(EstablishmentType::Bar),
                hotel_stay: ActiveValue::Set(false),
                event_space: ActiveValue::Set(false),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .exec_with_returning(&self.setup.db)
            .await?;

        let mut slot_models = Vec::with_capacity(slots.len());
        for (day, opening_time, closing_time) in slots {
            let slot = entity::prelude::OutletTimingSlot::insert(
                entity::outlet_timing_slot::ActiveModel {
                    id: ActiveValue::Set(Uuid::new_v4()),
                    outlet_timing_id: ActiveValue::Set(timing.id),
                    day: ActiveValue::Set(*day),
                    opening_time: ActiveValue::Set(*opening_time),
                    closing_time: ActiveValue::Set(*closing_time),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                },
            )
            .exec_with_returning(&self.setup.db)
            .await?;
            slot_models.push(slot);
        }

        Ok((timing, slot_models))
    }

    pub async fn insert_infinity_pass(
        &self,
    ) -> Result<entity::infinity_pass::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::InfinityPass::insert(entity::infinity_pass::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                start_time: ActiveValue::Set(time(18, 0)),
                end_time: ActiveValue::Set(time(23, 0)),
                days: ActiveValue::Set(DayList(vec![DayOfWeek::Friday, DayOfWeek::Saturday])),
                price: ActiveValue::Set(999),
                commission: ActiveValue::Set(300),
                cuisine: ActiveValue::Set(None),
                liquor_type: ActiveValue::Set(None),
                special_offer: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a complete outlet for the owner.
    ///
    /// Creates details, legal document, manager and a timing with a single Monday
    /// 18:00-23:00 slot. The outlet has no bartender and no infinity pass.
    pub async fn insert_outlet(&self, owner_id: Uuid) -> Result<entity::outlet::Model, TestError> {
        let details = self.insert_details().await?;
        let legal_document = self.insert_legal_document().await?;
        let manager = self.insert_manager().await?;
        let (timing, _) = self
            .insert_timing(&[(DayOfWeek::Monday, time(18, 0), time(23, 0))])
            .await?;

        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Outlet::insert(entity::outlet::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                name: ActiveValue::Set(Some(details.name.clone())),
                owner_id: ActiveValue::Set(owner_id),
                is_verified: ActiveValue::Set(false),
                details_id: ActiveValue::Set(details.id),
                legal_document_id: ActiveValue::Set(legal_document.id),
                manager_id: ActiveValue::Set(manager.id),
                timing_id: ActiveValue::Set(timing.id),
                bartender_id: ActiveValue::Set(None),
                infinity_pass_id: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
