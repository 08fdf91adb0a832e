//! Home page collection enrichment.
//!
//! Featured collections arrive holding only product references. The home page
//! resolves them against a product fetch, orders them by their
//! collection-local index, and merges them back with every other collection.
//! The steps are separate functions so the storefront can run the product
//! fetch between them; [`assemble_home`] composes the pure parts.

use std::collections::{BTreeSet, HashMap, HashSet};

use super::collection::{Collection, CollectionKind, ProductRef};
use super::product::Product;
use crate::types::{CollectionId, ProductId, Visibility};

/// Number of leading products per featured collection hidden from the
/// discovery feed.
pub const FEATURED_EXCLUSION_DEPTH: usize = 3;

/// A product positioned inside a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedProduct {
    pub product: Product,
    pub index: i64,
}

/// A featured collection whose references were resolved into products.
///
/// `products` is sorted ascending by index.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedCollection {
    pub id: CollectionId,
    pub index: i64,
    pub title: String,
    pub slug: String,
    pub visibility: Visibility,
    pub products: Vec<IndexedProduct>,
}

/// One entry of the merged home page list.
#[derive(Debug, Clone, PartialEq)]
pub enum HomeEntry {
    Featured(EnrichedCollection),
    Other(Collection),
}

impl HomeEntry {
    /// The collection's own ordering index.
    #[must_use]
    pub const fn index(&self) -> i64 {
        match self {
            Self::Featured(c) => c.index,
            Self::Other(c) => c.index,
        }
    }

    #[must_use]
    pub const fn id(&self) -> &CollectionId {
        match self {
            Self::Featured(c) => &c.id,
            Self::Other(c) => &c.id,
        }
    }
}

/// Result of the home page assembly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeLayout {
    /// Collections in render order.
    pub entries: Vec<HomeEntry>,
    /// Products already shown by featured collections.
    pub excluded: BTreeSet<ProductId>,
}

/// Featured collections that are published.
#[must_use]
pub fn select_featured(collections: &[Collection]) -> Vec<&Collection> {
    collections
        .iter()
        .filter(|c| c.kind.is_featured() && c.visibility == Visibility::Published)
        .collect()
}

/// Every product reference of the given collections, in discovery order.
#[must_use]
pub fn flatten_product_refs(featured: &[&Collection]) -> Vec<ProductRef> {
    featured
        .iter()
        .flat_map(|c| c.products.iter().cloned())
        .collect()
}

/// Distinct product ids to fetch, in discovery order.
#[must_use]
pub fn product_ids(refs: &[ProductRef]) -> Vec<ProductId> {
    let mut seen = HashSet::new();
    refs.iter()
        .filter(|r| seen.insert(&r.id))
        .map(|r| r.id.clone())
        .collect()
}

/// Attach to each fetched product the index of its first reference.
///
/// When a product is referenced by several featured collections, the first
/// reference in discovery order wins. Products without a reference get 0.
#[must_use]
pub fn annotate_products(products: Vec<Product>, refs: &[ProductRef]) -> Vec<IndexedProduct> {
    let mut first_index: HashMap<&ProductId, i64> = HashMap::new();
    for r in refs {
        first_index.entry(&r.id).or_insert(r.index);
    }

    products
        .into_iter()
        .map(|product| {
            let index = first_index.get(&product.id).copied().unwrap_or(0);
            IndexedProduct { product, index }
        })
        .collect()
}

/// Stable ascending sort by collection-local index.
pub fn sort_by_index(products: &mut [IndexedProduct]) {
    products.sort_by_key(|p| p.index);
}

/// Resolve each featured collection's references against the product pool.
///
/// References with no matching product are dropped. Each resolved product
/// takes the index of the reference that resolved it.
#[must_use]
pub fn enrich_featured(featured: &[&Collection], pool: &[IndexedProduct]) -> Vec<EnrichedCollection> {
    let mut by_id: HashMap<&ProductId, &IndexedProduct> = HashMap::new();
    for candidate in pool {
        by_id.entry(&candidate.product.id).or_insert(candidate);
    }

    featured
        .iter()
        .map(|collection| {
            let mut products: Vec<IndexedProduct> = collection
                .products
                .iter()
                .filter_map(|r| {
                    by_id.get(&r.id).map(|found| IndexedProduct {
                        product: found.product.clone(),
                        index: r.index,
                    })
                })
                .collect();
            sort_by_index(&mut products);

            EnrichedCollection {
                id: collection.id.clone(),
                index: collection.index,
                title: collection.title.clone(),
                slug: collection.slug.clone(),
                visibility: collection.visibility,
                products,
            }
        })
        .collect()
}

/// Enriched featured collections plus every non-featured collection,
/// stable-sorted by collection index.
#[must_use]
pub fn merge_collections(
    enriched: Vec<EnrichedCollection>,
    collections: &[Collection],
) -> Vec<HomeEntry> {
    let mut entries: Vec<HomeEntry> = enriched
        .into_iter()
        .map(HomeEntry::Featured)
        .chain(
            collections
                .iter()
                .filter(|c| !matches!(c.kind, CollectionKind::Featured))
                .cloned()
                .map(HomeEntry::Other),
        )
        .collect();
    entries.sort_by_key(HomeEntry::index);
    entries
}

/// Ids of the leading products of every featured entry.
#[must_use]
pub fn exclusion_set(entries: &[HomeEntry]) -> BTreeSet<ProductId> {
    entries
        .iter()
        .filter_map(|entry| match entry {
            HomeEntry::Featured(c) => Some(c),
            HomeEntry::Other(_) => None,
        })
        .flat_map(|c| {
            c.products
                .iter()
                .take(FEATURED_EXCLUSION_DEPTH)
                .map(|p| p.product.id.clone())
        })
        .collect()
}

/// Run the enrichment pipeline over already-fetched data.
///
/// `fetched` is the product fetch for [`product_ids`] of the featured
/// references; an empty fetch yields featured collections with no products.
#[must_use]
pub fn assemble_home(collections: &[Collection], fetched: Vec<Product>) -> HomeLayout {
    let featured = select_featured(collections);
    let refs = flatten_product_refs(&featured);
    let pool = annotate_products(fetched, &refs);
    let enriched = enrich_featured(&featured, &pool);
    let entries = merge_collections(enriched, collections);
    let excluded = exclusion_set(&entries);

    tracing::debug!(
        featured = featured.len(),
        entries = entries.len(),
        excluded = excluded.len(),
        "Assembled home layout"
    );

    HomeLayout { entries, excluded }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::collection::{BannerImages, CampaignDuration};

    fn collection(id: &str, index: i64, kind: CollectionKind, refs: &[(&str, i64)]) -> Collection {
        Collection {
            id: CollectionId::new(id),
            index,
            title: id.to_uppercase(),
            slug: id.to_string(),
            kind,
            campaign_duration: CampaignDuration::default(),
            visibility: Visibility::Published,
            products: refs.iter().map(|(p, i)| ProductRef::new(*p, *i)).collect(),
        }
    }

    fn banner() -> CollectionKind {
        CollectionKind::Banner {
            images: BannerImages {
                desktop_image: "d.jpg".to_string(),
                mobile_image: "m.jpg".to_string(),
            },
        }
    }

    fn products(ids: &[&str]) -> Vec<Product> {
        ids.iter().map(|id| Product::named(*id, *id)).collect()
    }

    fn ids(products: &[IndexedProduct]) -> Vec<&str> {
        products.iter().map(|p| p.product.id.as_str()).collect()
    }

    #[test]
    fn test_select_featured_requires_published() {
        let mut draft = collection("draft", 1, CollectionKind::Featured, &[]);
        draft.visibility = Visibility::Draft;
        let collections = vec![
            draft,
            collection("live", 2, CollectionKind::Featured, &[]),
            collection("promo", 3, banner(), &[]),
        ];
        let featured = select_featured(&collections);
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id.as_str(), "live");
    }

    #[test]
    fn test_product_ids_are_distinct_in_discovery_order() {
        let refs = vec![
            ProductRef::new("b", 1),
            ProductRef::new("a", 2),
            ProductRef::new("b", 3),
        ];
        let ids: Vec<String> = product_ids(&refs).into_iter().map(String::from).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn test_annotate_uses_first_reference() {
        let refs = vec![ProductRef::new("p1", 5), ProductRef::new("p1", 1)];
        let pool = annotate_products(products(&["p1", "p2"]), &refs);
        assert_eq!(pool[0].index, 5);
        assert_eq!(pool[1].index, 0);
    }

    #[test]
    fn test_enrich_sorts_by_reference_index() {
        let featured = collection(
            "new-in",
            1,
            CollectionKind::Featured,
            &[("p1", 3), ("p2", 1), ("p3", 2)],
        );
        let pool = annotate_products(products(&["p1", "p2", "p3"]), &featured.products);
        let enriched = enrich_featured(&[&featured], &pool);
        assert_eq!(ids(&enriched[0].products), ["p2", "p3", "p1"]);
    }

    #[test]
    fn test_enrich_drops_missing_products() {
        let featured = collection(
            "new-in",
            1,
            CollectionKind::Featured,
            &[("p1", 1), ("deleted", 2), ("p3", 3)],
        );
        let pool = annotate_products(products(&["p1", "p3"]), &featured.products);
        let enriched = enrich_featured(&[&featured], &pool);
        assert_eq!(ids(&enriched[0].products), ["p1", "p3"]);
    }

    #[test]
    fn test_shared_product_takes_each_collection_index() {
        let first = collection("a", 1, CollectionKind::Featured, &[("p1", 9), ("p2", 1)]);
        let second = collection("b", 2, CollectionKind::Featured, &[("p1", 0), ("p3", 1)]);
        let refs = flatten_product_refs(&[&first, &second]);
        let pool = annotate_products(products(&["p1", "p2", "p3"]), &refs);
        let enriched = enrich_featured(&[&first, &second], &pool);
        assert_eq!(ids(&enriched[0].products), ["p2", "p1"]);
        assert_eq!(ids(&enriched[1].products), ["p1", "p3"]);
    }

    #[test]
    fn test_ties_keep_reference_order() {
        let featured = collection(
            "ties",
            1,
            CollectionKind::Featured,
            &[("p2", 1), ("p1", 1), ("p3", 0)],
        );
        let pool = annotate_products(products(&["p1", "p2", "p3"]), &featured.products);
        let enriched = enrich_featured(&[&featured], &pool);
        assert_eq!(ids(&enriched[0].products), ["p3", "p2", "p1"]);
    }

    #[test]
    fn test_resorting_is_idempotent() {
        let featured = collection(
            "x",
            1,
            CollectionKind::Featured,
            &[("p1", 4), ("p2", 2), ("p3", 2), ("p4", 1)],
        );
        let pool = annotate_products(products(&["p1", "p2", "p3", "p4"]), &featured.products);
        let enriched = enrich_featured(&[&featured], &pool);
        let mut resorted = enriched[0].products.clone();
        sort_by_index(&mut resorted);
        assert_eq!(resorted, enriched[0].products);
    }

    #[test]
    fn test_merge_orders_by_collection_index() {
        let collections = vec![
            collection("featured-late", 5, CollectionKind::Featured, &[]),
            collection("banner", 2, banner(), &[("p1", 1)]),
            collection("lookbook", 1, CollectionKind::Other("LOOKBOOK".to_string()), &[]),
        ];
        let layout = assemble_home(&collections, Vec::new());
        let order: Vec<&str> = layout.entries.iter().map(|e| e.id().as_str()).collect();
        assert_eq!(order, ["lookbook", "banner", "featured-late"]);
    }

    #[test]
    fn test_unpublished_featured_disappears() {
        let mut hidden = collection("hidden", 1, CollectionKind::Featured, &[("p1", 1)]);
        hidden.visibility = Visibility::Hidden;
        let layout = assemble_home(&[hidden], products(&["p1"]));
        assert!(layout.entries.is_empty());
        assert!(layout.excluded.is_empty());
    }

    #[test]
    fn test_exclusion_takes_top_three_per_featured() {
        let collections = vec![
            collection(
                "a",
                1,
                CollectionKind::Featured,
                &[("p1", 1), ("p2", 2), ("p3", 3), ("p4", 4)],
            ),
            collection("b", 2, CollectionKind::Featured, &[("p9", 3), ("p1", 1), ("p5", 2)]),
            collection("banner", 3, banner(), &[("p7", 1)]),
        ];
        let layout = assemble_home(
            &collections,
            products(&["p1", "p2", "p3", "p4", "p5", "p7", "p9"]),
        );
        let excluded: Vec<&str> = layout.excluded.iter().map(ProductId::as_str).collect();
        assert_eq!(excluded, ["p1", "p2", "p3", "p5", "p9"]);
        assert!(layout.excluded.len() <= FEATURED_EXCLUSION_DEPTH * 2);
    }

    #[test]
    fn test_empty_inputs() {
        let layout = assemble_home(&[], Vec::new());
        assert_eq!(layout, HomeLayout::default());
    }
}
