//! The query pipeline: filter, sort, paginate.
//!
//! One pure routine shared by every storage backend. It consumes the
//! catalog's full-scan `list()` output and produces the page plus its
//! pagination metadata; backends never sort or filter on their own.
//!
//! Ordering semantics: string fields compare lower-cased, numbers compare
//! natively (an absent `published_year` sorts before any present year), and
//! descending is the exact reverse comparator. Equal keys carry no
//! guaranteed relative order.

use std::cmp::Ordering;

use folio_core::query::{page_bounds, BookFilter, ListQuery, Page, PageMeta, SortField, SortOrder};

use crate::models::book::Book;

/// Run the full pipeline over an owned record scan.
///
/// Deterministic for identical inputs; parameter validation has already
/// happened at the boundary (a [`ListQuery`] cannot hold an invalid sort).
pub fn run(records: Vec<Book>, query: &ListQuery) -> Page<Book> {
    let mut books: Vec<Book> = records
        .into_iter()
        .filter(|b| matches(&query.filter, b))
        .collect();

    sort(&mut books, query.sort_by, query.order);

    let meta = PageMeta::compute(books.len() as i64, query.page, query.limit);
    let (start, end) = page_bounds(books.len(), query.page, query.limit);
    books.truncate(end);
    books.drain(..start);

    Page {
        data: books,
        pagination: meta,
    }
}

/// Conjunctive filter predicate: category (exact, case-insensitive), author
/// (substring, case-insensitive), availability.
fn matches(filter: &BookFilter, book: &Book) -> bool {
    if let Some(category) = &filter.category {
        let hit = book
            .category
            .as_deref()
            .is_some_and(|c| c.to_lowercase() == category.to_lowercase());
        if !hit {
            return false;
        }
    }

    if let Some(author) = &filter.author {
        if !book
            .author
            .to_lowercase()
            .contains(&author.to_lowercase())
        {
            return false;
        }
    }

    if let Some(available) = filter.available {
        if (book.copies_available > 0) != available {
            return false;
        }
    }

    true
}

fn sort(books: &mut [Book], field: SortField, order: SortOrder) {
    books.sort_by(|a, b| {
        let ord = compare(a, b, field);
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
}

fn compare(a: &Book, b: &Book, field: SortField) -> Ordering {
    match field {
        SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortField::Author => a.author.to_lowercase().cmp(&b.author.to_lowercase()),
        // Option's ordering puts None before any Some, so books without a
        // publication year sort first ascending.
        SortField::PublishedYear => a.published_year.cmp(&b.published_year),
    }
}
