use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::pipeline::{currency, national_id};

/// Nationality of the franchisee; only Brazilians are required to present a valid CPF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nationality {
    #[default]
    Brazilian,
    Other,
}

/// One selectable royalty clause variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoyaltyOption {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// Witness signing the contract, numbered by position in the signature block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Witness {
    pub id: String,
    #[serde(default)]
    pub national_id: String,
    #[serde(default)]
    pub state_id: String,
}

/// Everything interpolated into one contract instance.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractRecord {
    pub name: String,
    pub nationality: Nationality,
    pub custom_nationality: String,
    pub marital_status: String,
    pub profession: String,
    pub state_id: String,
    pub national_id: String,

    pub street: String,
    pub number: String,
    pub complement: String,
    pub neighborhood: String,
    pub city_state: String,
    pub postal_code: String,

    pub kit_value: String,
    pub equipment_value: String,
    pub equipment_down_payment: String,
    pub equipment_due_date: String,
    pub equipment_installments: String,
    pub equipment_installment_value: String,
    pub franchisor_value: String,
    pub franchisor_down_payment: String,
    pub franchisor_due_date: String,
    pub franchisor_installments: String,
    pub franchisor_installment_value: String,
    pub franchise_fee: String,

    pub royalty_options: Vec<RoyaltyOption>,
    pub selected_royalty_id: String,

    pub signature_city: String,
    pub signature_date: String,

    pub witnesses: Vec<Witness>,
}

/// Free-text fields, addressed by the session's update events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    Name,
    CustomNationality,
    MaritalStatus,
    Profession,
    StateId,
    Street,
    Number,
    Complement,
    Neighborhood,
    CityState,
    PostalCode,
    EquipmentDueDate,
    EquipmentInstallments,
    FranchisorDueDate,
    FranchisorInstallments,
    SignatureCity,
    SignatureDate,
}

impl TextField {
    /// Fields a postal lookup may overwrite, plus the code that drives it.
    pub const fn is_address(self) -> bool {
        matches!(
            self,
            TextField::Street | TextField::Neighborhood | TextField::CityState | TextField::PostalCode
        )
    }
}

/// Monetary fields; their values always go through the currency masker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoneyField {
    KitValue,
    EquipmentValue,
    EquipmentDownPayment,
    EquipmentInstallmentValue,
    FranchisorValue,
    FranchisorDownPayment,
    FranchisorInstallmentValue,
    FranchiseFee,
}

impl MoneyField {
    pub const ALL: [MoneyField; 8] = [
        MoneyField::KitValue,
        MoneyField::EquipmentValue,
        MoneyField::EquipmentDownPayment,
        MoneyField::EquipmentInstallmentValue,
        MoneyField::FranchisorValue,
        MoneyField::FranchisorDownPayment,
        MoneyField::FranchisorInstallmentValue,
        MoneyField::FranchiseFee,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            MoneyField::KitValue => "kit_value",
            MoneyField::EquipmentValue => "equipment_value",
            MoneyField::EquipmentDownPayment => "equipment_down_payment",
            MoneyField::EquipmentInstallmentValue => "equipment_installment_value",
            MoneyField::FranchisorValue => "franchisor_value",
            MoneyField::FranchisorDownPayment => "franchisor_down_payment",
            MoneyField::FranchisorInstallmentValue => "franchisor_installment_value",
            MoneyField::FranchiseFee => "franchise_fee",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WitnessField {
    NationalId,
    StateId,
}

/// Structural problems with a record or with an update addressed to it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("royalty option '{0}' does not exist")]
    UnknownRoyaltyOption(String),
    #[error("royalty option id '{0}' is used more than once")]
    DuplicateRoyaltyOption(String),
    #[error("witness '{0}' does not exist")]
    UnknownWitness(String),
    #[error("witness id '{0}' is used more than once")]
    DuplicateWitness(String),
    #[error("{} must be blank or formatted as R$ d.ddd,dd", .0.as_str())]
    UnformattedAmount(MoneyField),
}

impl ContractRecord {
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::CustomNationality => &self.custom_nationality,
            TextField::MaritalStatus => &self.marital_status,
            TextField::Profession => &self.profession,
            TextField::StateId => &self.state_id,
            TextField::Street => &self.street,
            TextField::Number => &self.number,
            TextField::Complement => &self.complement,
            TextField::Neighborhood => &self.neighborhood,
            TextField::CityState => &self.city_state,
            TextField::PostalCode => &self.postal_code,
            TextField::EquipmentDueDate => &self.equipment_due_date,
            TextField::EquipmentInstallments => &self.equipment_installments,
            TextField::FranchisorDueDate => &self.franchisor_due_date,
            TextField::FranchisorInstallments => &self.franchisor_installments,
            TextField::SignatureCity => &self.signature_city,
            TextField::SignatureDate => &self.signature_date,
        }
    }

    pub(crate) fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Name => &mut self.name,
            TextField::CustomNationality => &mut self.custom_nationality,
            TextField::MaritalStatus => &mut self.marital_status,
            TextField::Profession => &mut self.profession,
            TextField::StateId => &mut self.state_id,
            TextField::Street => &mut self.street,
            TextField::Number => &mut self.number,
            TextField::Complement => &mut self.complement,
            TextField::Neighborhood => &mut self.neighborhood,
            TextField::CityState => &mut self.city_state,
            TextField::PostalCode => &mut self.postal_code,
            TextField::EquipmentDueDate => &mut self.equipment_due_date,
            TextField::EquipmentInstallments => &mut self.equipment_installments,
            TextField::FranchisorDueDate => &mut self.franchisor_due_date,
            TextField::FranchisorInstallments => &mut self.franchisor_installments,
            TextField::SignatureCity => &mut self.signature_city,
            TextField::SignatureDate => &mut self.signature_date,
        }
    }

    pub fn money(&self, field: MoneyField) -> &str {
        match field {
            MoneyField::KitValue => &self.kit_value,
            MoneyField::EquipmentValue => &self.equipment_value,
            MoneyField::EquipmentDownPayment => &self.equipment_down_payment,
            MoneyField::EquipmentInstallmentValue => &self.equipment_installment_value,
            MoneyField::FranchisorValue => &self.franchisor_value,
            MoneyField::FranchisorDownPayment => &self.franchisor_down_payment,
            MoneyField::FranchisorInstallmentValue => &self.franchisor_installment_value,
            MoneyField::FranchiseFee => &self.franchise_fee,
        }
    }

    pub(crate) fn money_mut(&mut self, field: MoneyField) -> &mut String {
        match field {
            MoneyField::KitValue => &mut self.kit_value,
            MoneyField::EquipmentValue => &mut self.equipment_value,
            MoneyField::EquipmentDownPayment => &mut self.equipment_down_payment,
            MoneyField::EquipmentInstallmentValue => &mut self.equipment_installment_value,
            MoneyField::FranchisorValue => &mut self.franchisor_value,
            MoneyField::FranchisorDownPayment => &mut self.franchisor_down_payment,
            MoneyField::FranchisorInstallmentValue => &mut self.franchisor_installment_value,
            MoneyField::FranchiseFee => &mut self.franchise_fee,
        }
    }

    /// Nationality as written into the preamble.
    pub fn nationality_label(&self) -> &str {
        match self.nationality {
            Nationality::Brazilian => "Brasileira",
            Nationality::Other => &self.custom_nationality,
        }
    }

    pub fn requires_national_id(&self) -> bool {
        self.nationality == Nationality::Brazilian
    }

    /// Whether the franchisee's CPF blocks export.
    pub fn national_id_blocks_export(&self) -> bool {
        self.requires_national_id() && !national_id::is_valid(&self.national_id)
    }

    pub fn selected_royalty(&self) -> Option<&RoyaltyOption> {
        self.royalty_options
            .iter()
            .find(|option| option.id == self.selected_royalty_id)
    }

    pub fn royalty_option(&self, id: &str) -> Option<&RoyaltyOption> {
        self.royalty_options.iter().find(|option| option.id == id)
    }

    /// Check id uniqueness and that the selection points at an existing option.
    pub fn check_integrity(&self) -> Result<(), RecordError> {
        let mut seen = HashSet::new();
        for option in &self.royalty_options {
            if !seen.insert(option.id.as_str()) {
                return Err(RecordError::DuplicateRoyaltyOption(option.id.clone()));
            }
        }

        if !self.selected_royalty_id.is_empty() && !seen.contains(self.selected_royalty_id.as_str())
        {
            return Err(RecordError::UnknownRoyaltyOption(
                self.selected_royalty_id.clone(),
            ));
        }

        let mut seen = HashSet::new();
        for witness in &self.witnesses {
            if !seen.insert(witness.id.as_str()) {
                return Err(RecordError::DuplicateWitness(witness.id.clone()));
            }
        }

        Ok(())
    }

    /// Every non-blank amount must already be in masker output form.
    pub fn check_amounts(&self) -> Result<(), RecordError> {
        let unformatted = MoneyField::ALL.into_iter().find(|&field| {
            let value = self.money(field);
            !value.is_empty() && !currency::is_formatted(value)
        });

        match unformatted {
            Some(field) => Err(RecordError::UnformattedAmount(field)),
            None => Ok(()),
        }
    }
}
