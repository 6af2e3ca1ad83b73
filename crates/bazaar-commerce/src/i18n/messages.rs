//! The translation store: UI strings keyed by message id, one column per
//! locale.

use crate::error::CommerceError;
use crate::i18n::Locale;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One message in every supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationEntry {
    pub uz: String,
    pub ru: String,
    pub en: String,
}

impl TranslationEntry {
    /// Create an entry from its three columns.
    pub fn new(uz: impl Into<String>, ru: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            uz: uz.into(),
            ru: ru.into(),
            en: en.into(),
        }
    }

    /// The text for `locale`.
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::Uz => &self.uz,
            Locale::Ru => &self.ru,
            Locale::En => &self.en,
        }
    }
}

/// Read-only table of translations.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    entries: HashMap<String, TranslationEntry>,
}

impl Translations {
    /// Build a table from `(key, entry)` pairs. Later duplicates win.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, TranslationEntry)>,
        K: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Parse a table of the form `{"home": {"uz": "...", "ru": "...", "en": "..."}}`.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let entries: HashMap<String, TranslationEntry> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// The storefront's built-in UI strings.
    pub fn builtin() -> Self {
        Self::from_entries(
            BUILTIN
                .iter()
                .map(|(key, [uz, ru, en])| (*key, TranslationEntry::new(*uz, *ru, *en))),
        )
    }

    /// Look up `key` for `locale`.
    pub fn get(&self, locale: Locale, key: &str) -> Option<&str> {
        self.entries.get(key).map(|e| e.get(locale))
    }

    /// Look up `key` for `locale`, echoing the key when it is unknown.
    pub fn translate<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        self.get(locale, key).unwrap_or(key)
    }

    /// Whether `key` has an entry.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Columns: uz, ru, en.
const BUILTIN: &[(&str, [&str; 3])] = &[
    // Navigation
    ("home", ["Bosh sahifa", "Главная", "Home"]),
    ("catalog", ["Katalog", "Каталог", "Catalog"]),
    ("cart", ["Savat", "Корзина", "Cart"]),
    ("wishlist", ["Sevimlilar", "Избранное", "Wishlist"]),
    ("compare", ["Taqqoslash", "Сравнение", "Compare"]),
    ("search", ["Qidirish", "Поиск", "Search"]),
    ("searchPlaceholder", ["Mahsulot qidirish...", "Поиск товаров...", "Search products..."]),
    ("recentSearches", ["Oxirgi qidiruvlar", "Недавние запросы", "Recent searches"]),
    ("recentlyViewed", ["Yaqinda ko'rilganlar", "Вы недавно смотрели", "Recently viewed"]),
    ("chooseLanguage", ["Tilni tanlang", "Выберите язык", "Choose your language"]),
    // Product cards
    ("addToCart", ["Savatga qo'shish", "В корзину", "Add to cart"]),
    ("addToWishlist", ["Sevimlilarga qo'shish", "В избранное", "Add to wishlist"]),
    ("removeFromWishlist", ["Sevimlilardan olib tashlash", "Убрать из избранного", "Remove from wishlist"]),
    ("addToCompare", ["Taqqoslashga qo'shish", "Добавить к сравнению", "Add to compare"]),
    ("inStock", ["Mavjud", "В наличии", "In stock"]),
    ("outOfStock", ["Mavjud emas", "Нет в наличии", "Out of stock"]),
    ("stockLeft", ["dona qoldi", "шт. осталось", "left in stock"]),
    ("new", ["Yangi", "Новинка", "New"]),
    ("reviews", ["sharhlar", "отзывов", "reviews"]),
    ("features", ["Xususiyatlar", "Характеристики", "Features"]),
    ("relatedProducts", ["O'xshash mahsulotlar", "Похожие товары", "Related products"]),
    // Listing filters and sorting
    ("filters", ["Filtrlar", "Фильтры", "Filters"]),
    ("allCategories", ["Barcha toifalar", "Все категории", "All categories"]),
    ("priceRange", ["Narx oralig'i", "Диапазон цен", "Price range"]),
    ("minRating", ["Minimal reyting", "Минимальный рейтинг", "Minimum rating"]),
    ("discountOnly", ["Faqat chegirmalar", "Только со скидкой", "Discounts only"]),
    ("newOnly", ["Faqat yangilar", "Только новинки", "New arrivals only"]),
    ("sortBy", ["Saralash", "Сортировка", "Sort by"]),
    ("sortPopular", ["Ommabop", "Популярные", "Popular"]),
    ("sortNewest", ["Eng yangi", "Новинки", "Newest"]),
    ("sortPriceLow", ["Arzonroq", "Сначала дешевле", "Price: low to high"]),
    ("sortPriceHigh", ["Qimmatroq", "Сначала дороже", "Price: high to low"]),
    ("sortRating", ["Reyting bo'yicha", "По рейтингу", "Top rated"]),
    ("noResults", ["Hech narsa topilmadi", "Ничего не найдено", "No products found"]),
    // Cart and checkout
    ("emptyCart", ["Savat bo'sh", "Корзина пуста", "Your cart is empty"]),
    ("quantity", ["Miqdor", "Количество", "Quantity"]),
    ("remove", ["O'chirish", "Удалить", "Remove"]),
    ("clearCart", ["Savatni tozalash", "Очистить корзину", "Clear cart"]),
    ("subtotal", ["Oraliq summa", "Подытог", "Subtotal"]),
    ("savings", ["Tejamkorlik", "Экономия", "You save"]),
    ("total", ["Jami", "Итого", "Total"]),
    ("checkout", ["Rasmiylashtirish", "Оформить заказ", "Checkout"]),
    ("emptyWishlist", ["Sevimlilar ro'yxati bo'sh", "В избранном пока пусто", "Your wishlist is empty"]),
    ("compareFull", ["Taqqoslash ro'yxati to'la", "Список сравнения заполнен", "Compare list is full"]),
    // Comparison table rows
    ("price", ["Narx", "Цена", "Price"]),
    ("originalPrice", ["Eski narx", "Старая цена", "Original price"]),
    ("rating", ["Reyting", "Рейтинг", "Rating"]),
    ("reviewCount", ["Sharhlar soni", "Количество отзывов", "Review count"]),
    ("availability", ["Mavjudligi", "Наличие", "Availability"]),
    ("category", ["Toifa", "Категория", "Category"]),
];
