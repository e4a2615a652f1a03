//! Item - a single catalogued object.

use std::fmt;

use crate::common::ItemId;

/// The variant-specific part of an [`Item`].
///
/// Closed set: every consumer matches on all three variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    Book {
        title: String,
        author: String,
        copyright_date: String,
    },
    Movie {
        title: String,
        director: String,
        main_actors: Vec<String>,
    },
    Magazine {
        edition: String,
        main_article_title: String,
    },
}

impl ItemKind {
    /// Variant label used in rendering ("Book", "Movie", "Magazine").
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Book { .. } => "Book",
            ItemKind::Movie { .. } => "Movie",
            ItemKind::Magazine { .. } => "Magazine",
        }
    }
}

/// A library item: common fields plus an [`ItemKind`].
///
/// Items are move-only. The storage hands them between slots and checkout
/// records by value, so an item has exactly one owner at any time.
///
/// # Rendering
/// `Display` produces one line, fixed per variant:
/// ```text
/// Book[id=1, name="N", title="T", author="A", copyright="C", desc="D"]
/// Movie[id=2, name="N", title="T", director="D", actors=[A, B], desc="D"]
/// Magazine[id=3, name="N", edition="E", mainArticle="M", desc="D"]
/// ```
///
/// # Example
/// ```
/// use library_inventory::Item;
///
/// let mag = Item::magazine("Tech Monthly", "Latest in tech", 3, "Vol 10", "The Future of AI");
/// assert_eq!(
///     mag.render(),
///     "Magazine[id=3, name=\"Tech Monthly\", edition=\"Vol 10\", \
///      mainArticle=\"The Future of AI\", desc=\"Latest in tech\"]"
/// );
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    name: String,
    description: String,
    kind: ItemKind,
}

impl Item {
    /// Create an item from its parts.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        description: impl Into<String>,
        kind: ItemKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            kind,
        }
    }

    /// Create a book.
    pub fn book(
        name: impl Into<String>,
        description: impl Into<String>,
        id: i32,
        title: impl Into<String>,
        author: impl Into<String>,
        copyright_date: impl Into<String>,
    ) -> Self {
        Self::new(
            ItemId(id),
            name,
            description,
            ItemKind::Book {
                title: title.into(),
                author: author.into(),
                copyright_date: copyright_date.into(),
            },
        )
    }

    /// Create a movie. Actor order is kept as given.
    pub fn movie(
        name: impl Into<String>,
        description: impl Into<String>,
        id: i32,
        title: impl Into<String>,
        director: impl Into<String>,
        main_actors: Vec<String>,
    ) -> Self {
        Self::new(
            ItemId(id),
            name,
            description,
            ItemKind::Movie {
                title: title.into(),
                director: director.into(),
                main_actors,
            },
        )
    }

    /// Create a magazine.
    pub fn magazine(
        name: impl Into<String>,
        description: impl Into<String>,
        id: i32,
        edition: impl Into<String>,
        main_article_title: impl Into<String>,
    ) -> Self {
        Self::new(
            ItemId(id),
            name,
            description,
            ItemKind::Magazine {
                edition: edition.into(),
                main_article_title: main_article_title.into(),
            },
        )
    }

    #[inline]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    /// Variant label, see [`ItemKind::name`].
    #[inline]
    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }

    /// Render the item as its one-line description.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[id={}, name=\"{}\"", self.kind.name(), self.id.0, self.name)?;

        match &self.kind {
            ItemKind::Book {
                title,
                author,
                copyright_date,
            } => write!(
                f,
                ", title=\"{}\", author=\"{}\", copyright=\"{}\"",
                title, author, copyright_date
            )?,
            ItemKind::Movie {
                title,
                director,
                main_actors,
            } => write!(
                f,
                ", title=\"{}\", director=\"{}\", actors=[{}]",
                title,
                director,
                main_actors.join(", ")
            )?,
            ItemKind::Magazine {
                edition,
                main_article_title,
            } => write!(
                f,
                ", edition=\"{}\", mainArticle=\"{}\"",
                edition, main_article_title
            )?,
        }

        write!(f, ", desc=\"{}\"]", self.description)
    }
}
