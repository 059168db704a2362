use serde::Serialize;

use super::template as t;
use crate::contract::ContractRecord;
use crate::pipeline::date;

const SIGNATURE_RULE: &str = "________________________________________";

/// One printed page of the agreement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub number: u32,
    pub lines: Vec<String>,
}

/// Rendered agreement, page by page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractDocument {
    pub pages: Vec<Page>,
}

impl ContractDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Plain-text form: each page opens with its number and ends with a form feed.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for page in &self.pages {
            out.push_str(&format!("{:>80}\n\n", page.number));
            for line in &page.lines {
                out.push_str(line);
                out.push('\n');
            }
            out.push('\u{c}');
            out.push('\n');
        }
        out
    }

    /// Whether any page contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.pages
            .iter()
            .flat_map(|page| page.lines.iter())
            .any(|line| line.contains(needle))
    }
}

#[derive(Default)]
struct PageWriter {
    pages: Vec<Page>,
}

impl PageWriter {
    fn page(&mut self) -> &mut Vec<String> {
        let number = self.pages.len() as u32 + 1;
        self.pages.push(Page {
            number,
            lines: Vec::new(),
        });
        let last = self.pages.len() - 1;
        &mut self.pages[last].lines
    }

    fn static_page(&mut self, lines: &[&str]) {
        self.page().extend(lines.iter().map(|line| line.to_string()));
    }

    fn finish(self) -> ContractDocument {
        ContractDocument { pages: self.pages }
    }
}

/// Interpolate `record` into the agreement.
///
/// Rendering never fails: blank fields print blank, blank dates print placeholders.
pub fn render(record: &ContractRecord) -> ContractDocument {
    let mut writer = PageWriter::default();

    writer.static_page(&[t::TITLE, t::SUBTITLE]);

    let preamble = writer.page();
    preamble.push(format!("{} {}", t::FRANCHISOR_QUALIFICATION, franchisee_paragraph(record)));
    preamble.push("CONSIDERAÇÕES INICIAIS".to_string());
    push_considerations(preamble, 0, t::CONSIDERATIONS_ON_PREAMBLE);

    let considerations = writer.page();
    push_considerations(
        considerations,
        t::CONSIDERATIONS_ON_PREAMBLE,
        t::INITIAL_CONSIDERATIONS.len(),
    );
    considerations.push(t::CONSIDERATIONS_CLOSING.to_string());
    considerations.extend(t::CLAUSES_1_TO_2_1.iter().map(|line| line.to_string()));

    writer.static_page(t::CLAUSES_2_2_TO_3);
    writer.static_page(t::CLAUSES_4_TO_5_1);
    writer.static_page(t::CLAUSES_5_2_TO_6);
    writer.static_page(t::CLAUSES_6_2_6_TO_7);
    writer.static_page(t::CLAUSES_7_2_7_TO_9_2);
    writer.static_page(t::CLAUSES_9_3_TO_10);

    investment_page(writer.page(), record);
    writer.static_page(t::CLAUSES_11_2_3_TO_11_6_5);
    royalty_catalog_page(writer.page(), record);
    royalty_choice_page(writer.page(), record);
    writer.static_page(t::CLAUSES_11_9_5_TO_13_1);
    writer.static_page(t::CLAUSES_13_2_TO_14_4);
    writer.static_page(t::CLAUSES_14_5_TO_15);
    writer.static_page(t::CLAUSE_16);
    signature_page(writer.page(), record);

    writer.finish()
}

fn franchisee_paragraph(record: &ContractRecord) -> String {
    let complement = if record.complement.is_empty() {
        String::new()
    } else {
        format!("{}, ", record.complement)
    };

    format!(
        "{name}, {nationality}, {marital}, {profession}, portadora do RG Nº {rg} inscrita no \
         CPF Nº {cpf}, residente e domiciliada na Rua {street}, n° {number}, {complement}bairro \
         {neighborhood}, {city_state}, CEP: {postal} denominada simplesmente FRANQUEADA, têm \
         entre si justo e acordado o presente {title}.",
        name = record.name.to_uppercase(),
        nationality = record.nationality_label(),
        marital = record.marital_status,
        profession = record.profession,
        rg = record.state_id,
        cpf = record.national_id,
        street = record.street,
        number = record.number,
        neighborhood = record.neighborhood,
        city_state = record.city_state,
        postal = record.postal_code,
        title = t::TITLE,
    )
}

fn push_considerations(lines: &mut Vec<String>, from: usize, to: usize) {
    for (index, text) in t::INITIAL_CONSIDERATIONS[from..to].iter().enumerate() {
        lines.push(format!("{} - {text}", roman(from + index + 1)));
    }
}

fn roman(mut value: usize) -> String {
    const NUMERALS: [(usize, &str); 5] = [(10, "X"), (9, "IX"), (5, "V"), (4, "IV"), (1, "I")];
    let mut out = String::new();
    for (weight, numeral) in NUMERALS {
        while value >= weight {
            out.push_str(numeral);
            value -= weight;
        }
    }
    out
}

fn investment_page(lines: &mut Vec<String>, record: &ContractRecord) {
    lines.push(t::CLAUSE_11_HEADING.to_string());
    lines.push(t::CLAUSE_11_1.to_string());
    lines.push(record.kit_value.clone());
    lines.push(t::CLAUSE_11_PAYMENT_INTRO.to_string());

    lines.push(t::EQUIPMENT_PAYEE.to_string());
    lines.push(format!(
        "{} a serem pagos da seguinte forma: Entrada via pix no valor de {} até o dia {} + {}x \
         no boleto de {} para empresa dos equipamentos.",
        record.equipment_value,
        record.equipment_down_payment,
        date::format_short(&record.equipment_due_date),
        record.equipment_installments,
        record.equipment_installment_value,
    ));

    lines.push(t::FRANCHISOR_PAYEE.to_string());
    lines.push(format!(
        "{} a serem pagos da seguinte forma: Entrada via pix no valor de {} até o dia {} + {}x \
         no boleto no valor de {} com vencimento para todo dia 30 para a franqueadora.",
        record.franchisor_value,
        record.franchisor_down_payment,
        date::format_short(&record.franchisor_due_date),
        record.franchisor_installments,
        record.franchisor_installment_value,
    ));

    lines.push(t::CLAUSE_11_AGREED.to_string());
    lines.push(t::CLAUSE_11_2_1.to_string());
    lines.push(format!(
        "11.2.2 A (TAF) Taxa de Aquisição de Franquia de {} para esse contrato foi negociada e \
         isentada, mas cabe esclarecer que tal valor é diferente dos valores de investimentos em \
         equipamentos e de todo aquele chamado KIT INICIAL do FRANQUEADO.",
        record.franchise_fee,
    ));
}

/// Drop a leading `Opção N: ` from an option title.
fn short_title(title: &str) -> &str {
    let Some(rest) = title.strip_prefix("Opção ") else {
        return title;
    };
    let digits = rest.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return title;
    }
    rest[digits..].strip_prefix(": ").unwrap_or(title)
}

fn royalty_catalog_page(lines: &mut Vec<String>, record: &ContractRecord) {
    lines.extend(t::CLAUSES_11_6_6_TO_11_7.iter().map(|line| line.to_string()));
    lines.push(format!(
        "Dentro da VOLL PILATES STUDIOS temos um sistema inovador de {} possibilidades de \
         Royalties:",
        record.royalty_options.len()
    ));
    for (index, option) in record.royalty_options.iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, short_title(&option.title)));
    }
    lines.extend(t::ROYALTY_EXPLANATION.iter().map(|line| line.to_string()));
    for option in &record.royalty_options {
        lines.push(format!("• {}", option.title));
        lines.push(format!("  {}", option.description));
    }
}

fn royalty_choice_page(lines: &mut Vec<String>, record: &ContractRecord) {
    lines.push(t::PARAGRAPH_ONE.to_string());
    let selected = record.selected_royalty();
    if let Some(option) = selected {
        lines.push(option.title.clone());
        lines.push(option.description.clone());
    }
    lines.push(t::CLAUSE_11_9_HEADING.to_string());
    lines.push(
        selected
            .map(|option| option.title.clone())
            .unwrap_or_else(|| t::NO_ROYALTY_SELECTED.to_string()),
    );
    lines.extend(t::CLAUSES_11_9_1_TO_11_9_4.iter().map(|line| line.to_string()));
}

fn signature_page(lines: &mut Vec<String>, record: &ContractRecord) {
    lines.push(format!(
        "{}, {}",
        record.signature_city.to_uppercase(),
        date::format_long(&record.signature_date)
    ));
    lines.push(String::new());

    lines.push(SIGNATURE_RULE.to_string());
    lines.push(t::FRANCHISOR.to_string());
    lines.push(t::FRANCHISOR_TAX_ID.to_string());
    lines.push(String::new());

    lines.push(SIGNATURE_RULE.to_string());
    lines.push(record.name.to_uppercase());
    lines.push(format!(
        "RG: {} CPF: {}",
        record.state_id.to_uppercase(),
        record.national_id.to_uppercase()
    ));
    lines.push(t::FRANCHISEE_ROLE.to_string());

    for (index, witness) in record.witnesses.iter().enumerate() {
        lines.push(String::new());
        lines.push(SIGNATURE_RULE.to_string());
        lines.push(format!("TESTEMUNHA {}", index + 1));
        lines.push(format!("CPF: {}", witness.national_id));
        lines.push(format!("RG: {}", witness.state_id));
    }
}
