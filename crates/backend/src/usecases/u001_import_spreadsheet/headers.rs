use super::workbook::Worksheet;

/// Соответствие "имя колонки -> позиция" для одного листа.
///
/// Берётся первая строка листа; пустые заголовки отбрасываются, но остальные
/// сохраняют свою исходную позицию (с нуля). Имена сравниваются без учета регистра,
/// при повторе заголовка побеждает первый.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    columns: Vec<HeaderColumn>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct HeaderColumn {
    name: String,
    key: String,
    position: usize,
}

impl HeaderMap {
    pub fn resolve(sheet: &Worksheet) -> Self {
        let columns = sheet
            .header_row()
            .iter()
            .enumerate()
            .filter_map(|(position, cell)| {
                cell.as_text().map(|name| HeaderColumn {
                    key: name.to_lowercase(),
                    name,
                    position,
                })
            })
            .collect();
        Self { columns }
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        let key = column.to_lowercase();
        self.columns
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.position)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.position(column).is_some()
    }

    /// Заголовки как в файле, в порядке колонок
    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Обязательные колонки, которых нет на листе
    pub fn missing<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|column| !self.contains(column))
            .collect()
    }
}
