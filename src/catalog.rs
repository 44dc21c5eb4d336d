//! Gallery data: a small book catalog, its TSV loader, and the column set
//! used to display it.

use std::path::Path;

use chrono::{Datelike, NaiveDate};
use tabula::core::{Record, TableColumn};
use tabula::Error;

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub published: NaiveDate,
    pub pages: u32,
    pub synopsis: String,
}

impl Record for Book {
    fn field(&self, name: &str) -> Option<String> {
        match name {
            "isbn" => Some(self.isbn.clone()),
            "title" => Some(self.title.clone()),
            "author" => Some(self.author.clone()),
            "published" => Some(self.published.format("%Y-%m-%d").to_string()),
            "pages" => Some(self.pages.to_string()),
            "synopsis" => Some(self.synopsis.clone()),
            _ => None,
        }
    }
}

/// Row key: books are identified by ISBN.
pub fn book_key(book: &Book, _index: usize) -> String {
    book.isbn.clone()
}

/// Detail content shown under an expanded book.
pub fn book_detail(book: &Book) -> String {
    format!(
        "{}\n{} pages · {} · ISBN {}",
        book.synopsis,
        book.pages,
        book.published.format("%B %Y"),
        book.isbn
    )
}

/// Whole years between `published` and `today` (0 for future dates).
pub fn age_in_years(published: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - published.year();
    if (today.month(), today.day()) < (published.month(), published.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

/// The gallery's columns: a computed position, plain fields, and a
/// computed age.
pub fn columns() -> Vec<TableColumn<Book>> {
    vec![
        TableColumn::computed("#", |_: &Book, i| (i + 1).to_string()),
        TableColumn::field("ISBN", "isbn").class_name("isbn"),
        TableColumn::field("Title", "title").class_name("title"),
        TableColumn::field("Author", "author").class_name("author"),
        TableColumn::field("Published", "published"),
        TableColumn::field("Pages", "pages"),
        TableColumn::computed("Age", |b: &Book, _| {
            let today = chrono::Local::now().date_naive();
            format!("{}y", age_in_years(b.published, today))
        }),
    ]
}

// ───────────────────────────────────────── loading ───────────

/// Parse TSV: `isbn  title  author  published(YYYY-MM-DD)  pages  synopsis`.
/// Blank lines and `#` comments are skipped.
pub fn parse_tsv(s: &str) -> tabula::Result<Vec<Book>> {
    let mut books = Vec::new();
    for (i, line) in s.lines().enumerate() {
        let line_no = i + 1;
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
        let [isbn, title, author, published, pages, synopsis] = fields[..] else {
            return Err(Error::parse(
                line_no,
                format!("expected 6 tab-separated fields, found {}", fields.len()),
            ));
        };

        let published = NaiveDate::parse_from_str(published, "%Y-%m-%d")
            .map_err(|e| Error::parse(line_no, format!("bad date `{published}`: {e}")))?;
        let pages = pages
            .parse()
            .map_err(|_| Error::parse(line_no, format!("bad page count `{pages}`")))?;

        books.push(Book {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            published,
            pages,
            synopsis: synopsis.replace("\\n", "\n"),
        });
    }
    tracing::debug!(count = books.len(), "parsed catalog");
    Ok(books)
}

pub fn load_tsv(path: &Path) -> tabula::Result<Vec<Book>> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_tsv(&contents)
}

/// Built-in catalog used when no data file is given.
pub fn sample() -> Vec<Book> {
    const SAMPLE: &str = "\
# isbn\ttitle\tauthor\tpublished\tpages\tsynopsis
978-0-13-110362-7\tThe C Programming Language\tKernighan & Ritchie\t1988-03-22\t272\tThe classic introduction to C by its designers.
978-0-262-03384-8\tIntroduction to Algorithms\tCormen et al.\t2009-07-31\t1312\tA comprehensive survey of algorithms and data structures.
978-0-201-63361-0\tDesign Patterns\tGamma, Helm, Johnson, Vlissides\t1994-10-31\t395\tTwenty-three patterns for object-oriented design.\\nThe Gang of Four book.
978-1-59327-828-1\tThe Rust Programming Language\tKlabnik & Nichols\t2018-06-26\t552\tThe official book on Rust: ownership, borrowing, traits, and more.
978-0-596-51774-8\tJavaScript: The Good Parts\tDouglas Crockford\t2008-05-01\t176\tA short tour of the reliable subset of JavaScript.
978-0-13-235088-4\tClean Code\tRobert C. Martin\t2008-08-01\t464\tA handbook of agile software craftsmanship.
978-1-4493-7332-1\tDesigning Data-Intensive Applications\tMartin Kleppmann\t2017-03-16\t616\tReliability, scalability, and maintainability of data systems.
978-0-262-51087-5\tStructure and Interpretation of Computer Programs\tAbelson & Sussman\t1996-07-25\t657\tComputation, abstraction, and the metacircular evaluator.
";
    match parse_tsv(SAMPLE) {
        Ok(books) => books,
        Err(e) => {
            tracing::warn!("built-in catalog: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula::core::{ExpansionState, Table};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn sample_catalog_parses() {
        let books = sample();
        assert_eq!(books.len(), 8);
        assert_eq!(books[0].author, "Kernighan & Ritchie");
        assert!(books[2].synopsis.contains('\n'));
    }

    #[test]
    fn tsv_rejects_wrong_field_count() {
        let err = parse_tsv("\n# header\nonly\ttwo\n").unwrap_err();
        assert_eq!(err.to_string(), "line 3: expected 6 tab-separated fields, found 2");
    }

    #[test]
    fn tsv_rejects_bad_numbers_and_dates() {
        let err = parse_tsv("x\tt\ta\t2020-01-01\tmany\ts\n").unwrap_err();
        assert_eq!(err.to_string(), "line 1: bad page count `many`");
        assert!(parse_tsv("x\tt\ta\t2020-13-01\t1\ts\n").is_err());
    }

    #[test]
    fn age_counts_whole_years() {
        assert_eq!(age_in_years(date(2000, 6, 15), date(2010, 6, 14)), 9);
        assert_eq!(age_in_years(date(2000, 6, 15), date(2010, 6, 15)), 10);
        assert_eq!(age_in_years(date(2030, 1, 1), date(2010, 1, 1)), 0);
    }

    #[test]
    fn book_fields_feed_the_table() {
        let books = sample();
        let columns = columns();
        let view = Table::new(&books, &columns, book_key)
            .expand_row_render(book_detail)
            .build(&ExpansionState::new());

        assert_eq!(view.body.len(), books.len());
        assert_eq!(view.body[1].key(), "978-0-262-03384-8");
        match &view.body[1] {
            tabula::core::BodyRow::Data { cells, .. } => {
                assert_eq!(cells[0].content, "2");
                assert_eq!(cells[2].content, "Introduction to Algorithms");
                assert_eq!(cells[4].content, "2009-07-31");
                assert_eq!(cells[5].content, "1312");
            }
            other => panic!("expected data row, got {other:?}"),
        }
    }

    #[test]
    fn detail_includes_synopsis_and_metadata() {
        let books = sample();
        let detail = book_detail(&books[3]);
        assert!(detail.starts_with("The official book on Rust"));
        assert!(detail.contains("552 pages · June 2018"));
    }
}
