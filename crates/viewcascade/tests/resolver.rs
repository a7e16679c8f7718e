//! End-to-end resolution tests.
//!
//! Drives the public API (`resolve`, `rendering_order`, `Resolver`) with an
//! in-memory store. Each test covers one observable behavior of a full
//! resolution.

use std::sync::Arc;

use viewcascade::{
    ErrorCode, MemoryStore, PropertyDesc, ResolverConfig, Resolver, Target, TypeDesc,
    ViewConventions, rendering_order, resolve,
};

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// `/views/`, root `App`, fallback `Edit`, `.tmpl` files, lowercase paths.
fn views() -> ResolverConfig {
    ResolverConfig::default()
        .with_base_path("/views/")
        .with_root_namespace("App")
        .with_dynamic_view("Edit")
        .with_conventions(ViewConventions::new(".tmpl", None).lowercased())
}

fn widget() -> TypeDesc {
    TypeDesc::new("App.Models", "Widget")
}

// ─── Exact match ─────────────────────────────────────────────────────────────

#[test]
fn widget_resolves_to_its_own_template() {
    let store = MemoryStore::new().with("/views/models/widget.tmpl");
    let res = resolve(Target::of_type(&widget()), &views(), &store).unwrap();
    assert_eq!(res.matched_path().unwrap(), "/views/models/widget.tmpl");
    assert!(!res.is_dynamic());
    assert!(res.has_match());
}

#[test]
fn widget_order_is_name_then_catchall() {
    let order = rendering_order(Target::of_type(&widget()), &views()).unwrap();
    assert_eq!(order, vec!["App.Models.Widget", "App.Models.$Object"]);
}

// ─── Dynamic fallback ────────────────────────────────────────────────────────

#[test]
fn nothing_present_falls_back_to_dynamic() {
    let res = resolve(Target::of_type(&widget()), &views(), &MemoryStore::new()).unwrap();
    assert!(res.is_dynamic());
    assert!(!res.has_match());
    assert_eq!(res.results().last().map(|r| r.path()), Some("/views/edit.tmpl"));
    assert_eq!(res.matched_path().unwrap_err().code(), ErrorCode::M001);
}

#[test]
fn dynamic_fallback_can_match() {
    let store = MemoryStore::new().with("/views/edit.tmpl");
    let res = resolve(Target::of_type(&widget()), &views(), &store).unwrap();
    assert!(res.is_dynamic());
    assert!(res.has_match());
    assert_eq!(res.matched_path().unwrap(), "/views/edit.tmpl");
}

// ─── Bare names ──────────────────────────────────────────────────────────────

#[test]
fn bare_name_has_no_cascade() {
    let cfg = ResolverConfig::default().with_base_path("/views/");
    let order = rendering_order(Target::by_name("Legacy.Report"), &cfg).unwrap();
    assert_eq!(order, vec!["Legacy.Report"]);

    let store = MemoryStore::new().with("~/views/Legacy/Report.cshtml");
    let res = resolve(Target::by_name("Legacy.Report"), &cfg, &store).unwrap();
    assert_eq!(res.matched_path().unwrap(), "~/views/Legacy/Report.cshtml");
    assert_eq!(res.results().len(), 1);
}

#[test]
fn bare_name_outside_root_is_rejected() {
    let err = resolve(Target::by_name("Legacy.Report"), &views(), &MemoryStore::new()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::C001);
}

// ─── Properties and attributes ───────────────────────────────────────────────

#[test]
fn property_attribute_beats_type_template() {
    let t = Arc::new(widget());
    let prop = PropertyDesc::new("Thumbnail", t).with_attribute("Compact");
    let store = MemoryStore::new()
        .with("/views/@compact.tmpl")
        .with("/views/models/widget.tmpl");
    let res = resolve(Target::of_property(&prop), &views(), &store).unwrap();
    assert_eq!(res.rendering_order(), &["@Compact", "App.Models.Widget", "App.Models.$Object"]);
    assert_eq!(res.matched_path().unwrap(), "/views/@compact.tmpl");
    assert_eq!(res.existing().count(), 2);
}

#[test]
fn base_type_template_serves_derived_type() {
    let entity = TypeDesc::new("App.Models", "Entity").shared();
    let gadget = TypeDesc::new("App.Models", "Gadget").with_base(entity);
    let store = MemoryStore::new().with("/views/models/entity.tmpl");

    let res = resolve(Target::of_type(&gadget), &views(), &store).unwrap();
    assert_eq!(res.matched_path().unwrap(), "/views/models/entity.tmpl");

    let exact = views().exact_only(true);
    let res = resolve(Target::of_type(&gadget), &exact, &store).unwrap();
    assert!(res.is_dynamic());
}

// ─── Collections ─────────────────────────────────────────────────────────────

#[test]
fn array_and_list_of_same_element_stay_apart() {
    let element = Arc::new(widget());
    let array = TypeDesc::array_of(element.clone());
    let list = TypeDesc::collection("System.Collections.Generic", "List`1", element);
    let store = MemoryStore::new()
        .with("/views/array/models/widget.tmpl")
        .with("/views/system/collections/generic/list/models/widget.tmpl");

    let a = resolve(Target::of_type(&array), &views(), &store).unwrap();
    let l = resolve(Target::of_type(&list), &views(), &store).unwrap();
    assert_eq!(a.matched_path().unwrap(), "/views/array/models/widget.tmpl");
    assert_eq!(l.matched_path().unwrap(), "/views/system/collections/generic/list/models/widget.tmpl");
}

// ─── Sharing ─────────────────────────────────────────────────────────────────

#[test]
fn resolver_is_shareable_across_threads() {
    let config = views();
    let store = Arc::new(MemoryStore::new().with("/views/models/widget.tmpl"));
    let resolver = Resolver::new(&config, store);
    let t = widget();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| resolver.resolve(Target::of_type(&t)).map(|r| r.results().to_vec())))
            .collect();
        let outcomes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap().unwrap()).collect();
        assert!(outcomes.windows(2).all(|w| w[0] == w[1]));
    });
}
