// ---------------------------------------------------------------------------
// Taxonomic ranks
// ---------------------------------------------------------------------------

/// The seven standard ranks, kingdom down to species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TaxRank {
    Kingdom,
    Phylum,
    Class,
    Order,
    Family,
    Genus,
    Species,
}

impl TaxRank {
    /// All ranks in lineage order.
    pub const ALL: [TaxRank; 7] = [
        TaxRank::Kingdom,
        TaxRank::Phylum,
        TaxRank::Class,
        TaxRank::Order,
        TaxRank::Family,
        TaxRank::Genus,
        TaxRank::Species,
    ];

    /// Greengenes-style marker that prefixes a field of this rank, e.g. `k__`.
    pub const fn marker(self) -> &'static str {
        match self {
            TaxRank::Kingdom => "k__",
            TaxRank::Phylum => "p__",
            TaxRank::Class => "c__",
            TaxRank::Order => "o__",
            TaxRank::Family => "f__",
            TaxRank::Genus => "g__",
            TaxRank::Species => "s__",
        }
    }
}

// ---------------------------------------------------------------------------
// Label cleaning
// ---------------------------------------------------------------------------

/// Legacy string-type prefix written in front of quoted list items,
/// as in `[u'k__Bacteria', u'p__Firmicutes']`.
const LEGACY_STRING_PREFIX: char = 'u';

/// Normalise a serialized taxonomy list into comma-separated rank fields.
///
/// `[u'k__Bacteria', u'p__Firmicutes']` becomes `k__Bacteria,p__Firmicutes`.
/// Input that does not look like a list passes through unchanged.
pub fn clean_taxa_string(raw: &str) -> String {
    let mut taxa: String = raw.chars().filter(|c| *c != '[' && *c != ']').collect();

    for rank in TaxRank::ALL {
        let marker = rank.marker();
        let prefixed = format!("{LEGACY_STRING_PREFIX}'{marker}");
        taxa = taxa.replace(&prefixed, marker);
    }

    taxa.retain(|c| c != '\'');

    // A single replace leaves ", " behind for runs like ",  ".
    while taxa.contains(", ") {
        taxa = taxa.replace(", ", ",");
    }
    taxa
}

/// Keep the first `depth` comma-separated fields of a cleaned label and
/// join them with `;`.
pub fn truncate_ranks(cleaned: &str, depth: usize) -> String {
    cleaned.split(',').take(depth).collect::<Vec<_>>().join(";")
}
