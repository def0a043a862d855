use super::*;
use crate::panels::defs::builtin_panels;

#[test]
fn test_band_boundaries() {
    assert_eq!(cpt_code(50), "81450");
    assert_eq!(cpt_code(51), "81455");
    assert_eq!(cpt_code(100), "81455");
    assert_eq!(cpt_code(101), "81455");
    assert_eq!(cpt_code(1), "81450");
}

#[test]
fn test_bands() {
    assert_eq!(GeneBand::for_gene_count(50), GeneBand::UpTo50);
    assert_eq!(GeneBand::for_gene_count(51), GeneBand::From51To100);
    assert_eq!(GeneBand::for_gene_count(100), GeneBand::From51To100);
    assert_eq!(GeneBand::for_gene_count(101), GeneBand::Over100);
    assert_eq!(GeneBand::Over100.label(), ">100");
}

#[test]
fn test_upper_bands_share_code() {
    assert_eq!(
        cpt_for_band(GeneBand::From51To100),
        cpt_for_band(GeneBand::Over100)
    );
}

#[test]
fn test_catalog_codes_in_known_set() {
    for panel in builtin_panels() {
        let code = cpt_code(panel.gene_count);
        assert!(code == "81450" || code == "81455", "{}", panel.name);
        assert_eq!(code, cpt_code(panel.gene_count));
    }
}
