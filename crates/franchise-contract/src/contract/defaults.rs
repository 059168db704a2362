use chrono::NaiveDate;

use super::domain::{ContractRecord, Nationality, RoyaltyOption, Witness};

/// Choices offered for the marital status field.
pub const MARITAL_STATUSES: [&str; 6] = [
    "Solteiro(a)",
    "Casado(a)",
    "Divorciado(a)",
    "Viúvo(a)",
    "Separado(a) judicialmente",
    "União Estável",
];

pub const NEW_ROYALTY_TITLE: &str = "Nova Opção de Royalties";
pub const NEW_ROYALTY_DESCRIPTION: &str = "Descrição da nova opção.";

const DEFAULT_ROYALTY_ID: &str = "990";

pub fn standard_royalty_options() -> Vec<RoyaltyOption> {
    vec![
        RoyaltyOption {
            id: "990".to_string(),
            title: "Opção 1: R$ 990,00 (novecentos e noventa reais) ao mês.".to_string(),
            description: "O valor de royalties começará a ser cobrado no mês subsequente a \
                realização da inauguração, e assim consequentemente nos meses posteriores. \
                (Com recebimento de Cursos VOLL)"
                .to_string(),
        },
        RoyaltyOption {
            id: "1490".to_string(),
            title: "Opção 2: R$ 1.490,00 (um mil quatrocentos e noventa reais) ao mês."
                .to_string(),
            description: "O valor de royalties começará a ser cobrado no mês subsequente a \
                realização da inauguração, e assim consequentemente nos meses posteriores. \
                (Sem recebimento de Cursos VOLL)"
                .to_string(),
        },
        RoyaltyOption {
            id: "isencao".to_string(),
            title: "Opção 3: Isenção de Royalties.".to_string(),
            description:
                "Conforme condições de não recebimento de cursos descritas na cláusula 11.8."
                    .to_string(),
        },
    ]
}

fn blank_witness(id: &str) -> Witness {
    Witness {
        id: id.to_string(),
        national_id: String::new(),
        state_id: String::new(),
    }
}

impl ContractRecord {
    /// Fresh form: standard royalty options with the first selected, two blank witnesses
    /// and the signature dated `today`.
    pub fn initial(today: NaiveDate) -> Self {
        Self {
            nationality: Nationality::Brazilian,
            royalty_options: standard_royalty_options(),
            selected_royalty_id: DEFAULT_ROYALTY_ID.to_string(),
            signature_date: today.format("%Y-%m-%d").to_string(),
            witnesses: vec![blank_witness("1"), blank_witness("2")],
            ..Self::default()
        }
    }

    /// Fully populated demonstration record, used for previews and smoke tests.
    pub fn sample(today: NaiveDate) -> Self {
        let initial = Self::initial(today);
        let selected_royalty_id = initial
            .royalty_options
            .first()
            .map(|option| option.id.clone())
            .unwrap_or_default();

        Self {
            name: "AQUI VAI O NOME COMPLETO".to_string(),
            nationality: Nationality::Brazilian,
            marital_status: "Casado(a)".to_string(),
            profession: "AQUI VAI A PROFISSÃO".to_string(),
            state_id: "1234567890".to_string(),
            national_id: "529.982.247-25".to_string(),
            street: "AQUI VAI O ENDEREÇO (RUA)".to_string(),
            number: "123".to_string(),
            complement: "Apto 101".to_string(),
            neighborhood: "Centro".to_string(),
            city_state: "Porto Alegre/RS".to_string(),
            postal_code: "90000-000".to_string(),

            kit_value: "R$ 56.890,00".to_string(),
            equipment_value: "R$ 21.990,00".to_string(),
            equipment_down_payment: "R$ 1.832,50".to_string(),
            equipment_due_date: "2025-10-30".to_string(),
            equipment_installments: "11".to_string(),
            equipment_installment_value: "R$ 1.832,50".to_string(),

            franchisor_value: "R$ 34.900,00".to_string(),
            franchisor_down_payment: "R$ 2.908,33".to_string(),
            franchisor_due_date: "2025-10-28".to_string(),
            franchisor_installments: "11".to_string(),
            franchisor_installment_value: "R$ 2.908,33".to_string(),
            franchise_fee: "R$ 15.000,00".to_string(),

            selected_royalty_id,
            signature_city: "Porto Alegre".to_string(),
            witnesses: vec![
                Witness {
                    id: "1".to_string(),
                    national_id: "111.444.777-35".to_string(),
                    state_id: "123456".to_string(),
                },
                Witness {
                    id: "2".to_string(),
                    national_id: "000.000.000-00".to_string(),
                    state_id: "654321".to_string(),
                },
            ],
            ..initial
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::currency;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 18).expect("valid date")
    }

    #[test]
    fn initial_record_matches_blank_form() {
        let record = ContractRecord::initial(today());
        assert_eq!(record.signature_date, "2025-10-18");
        assert_eq!(record.selected_royalty_id, "990");
        assert_eq!(record.royalty_options.len(), 3);
        assert_eq!(record.witnesses.len(), 2);
        assert!(record.name.is_empty());
        assert!(record.kit_value.is_empty());
        assert_eq!(record.check_integrity(), Ok(()));
    }

    #[test]
    fn sample_record_is_exportable() {
        let record = ContractRecord::sample(today());
        assert!(!record.national_id_blocks_export());
        assert_eq!(record.check_integrity(), Ok(()));
        assert!(record.selected_royalty().is_some());
        assert!(MARITAL_STATUSES.contains(&record.marital_status.as_str()));
        for value in [
            &record.kit_value,
            &record.equipment_value,
            &record.franchisor_installment_value,
            &record.franchise_fee,
        ] {
            assert!(currency::is_formatted(value), "{value}");
        }
    }
}
