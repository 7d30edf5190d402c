//! Reference vessel scenarios: D = 5 in, t = 0.1 in, L = 10 in,
//! E = 1e7 psi, v = 0.3, p = 100 psi.

use approx::assert_abs_diff_eq;

use vessel_core::calculations::{calculate, sweep_stress, AnalysisInput, StressKind, SweepConfig};
use vessel_core::equations::*;
use vessel_core::materials::{Material, MaterialTable};
use vessel_core::units::{cubic_in_to_cubic_mm, lb_per_in3_to_kg_per_mm3, psi_to_mpa};
use vessel_core::vessel::{Vessel, WallClass};

const P: f64 = 100.0;

fn reference_material() -> Material {
    Material::elastic("reference", 10.0e6, 0.3).with_yield(35_000.0)
}

#[test]
fn thin_wall_reference_values() {
    let matl = reference_material();
    let vessel = Vessel::new("vessel_1", &matl, 10.0, 5.0, 0.1).unwrap();
    assert_eq!(vessel.wall_class(), WallClass::Thin);

    assert_abs_diff_eq!(thin_hoop_stress(&vessel, P), 2500.0, epsilon = 1e-9);
    assert_abs_diff_eq!(thin_longitudinal_stress(&vessel, P), 1250.0, epsilon = 1e-9);
    assert_abs_diff_eq!(thin_diameter_reduction(&vessel, P).unwrap().abs(), 0.0010625, epsilon = 1e-8);
    assert_abs_diff_eq!(thin_length_reduction(&vessel, P).unwrap().abs(), 0.0005, epsilon = 1e-12);
    assert_abs_diff_eq!(thin_critical_buckling_pressure(&vessel, 1).unwrap(), 44614.12796007, epsilon = 1e-6);
}

#[test]
fn thick_wall_reference_values() {
    let matl = reference_material();
    let vessel = Vessel::new("vessel_1", &matl, 10.0, 5.0, 0.1).unwrap();

    assert_abs_diff_eq!(thick_hoop_stress(&vessel, P, 50.0).unwrap(), -2499.49000841, epsilon = 1e-8);
    assert_abs_diff_eq!(thick_hoop_stress_max(&vessel, P).unwrap(), -2551.02040816, epsilon = 1e-8);
    assert_abs_diff_eq!(thick_longitudinal_stress(&vessel, P).unwrap(), -1275.51020408, epsilon = 1e-8);
    assert_abs_diff_eq!(thick_radial_stress(&vessel, P, 50.0).unwrap(), -51.53039975, epsilon = 1e-8);
    assert_abs_diff_eq!(thick_outer_diameter_reduction(&vessel, P).unwrap(), -0.00101918367, epsilon = 1e-10);
    assert_abs_diff_eq!(thick_inner_diameter_reduction(&vessel, P).unwrap(), -0.00104081633, epsilon = 1e-10);
    assert_abs_diff_eq!(thick_length_reduction(&vessel, P).unwrap(), -0.00051020408, epsilon = 1e-10);

    assert_eq!(thick_radial_stress_max(&vessel, P).unwrap(), -P);
    assert_eq!(thick_radial_stress(&vessel, P, 100.0).unwrap(), -P);
    assert_eq!(
        thick_shear_stress(&vessel, P, 50.0).unwrap(),
        thick_longitudinal_stress(&vessel, P).unwrap()
    );
}

#[test]
fn depth_conversion_reference_values() {
    assert_abs_diff_eq!(depth_to_pressure(100.0), 44.54545454, epsilon = 1e-8);
    assert_eq!(depth_to_pressure(0.0), 0.0);
    assert_abs_diff_eq!(pressure_to_depth(100.0), 224.48979592, epsilon = 1e-8);
}

#[test]
fn unit_conversion_reference_values() {
    assert_abs_diff_eq!(psi_to_mpa(145_040.0), 1000.0, epsilon = 1e-9);
    assert_abs_diff_eq!(lb_per_in3_to_kg_per_mm3(0.1), 29.32545455, epsilon = 1e-8);
    assert_abs_diff_eq!(cubic_in_to_cubic_mm(0.1), 0.1 * 25.4_f64.powi(3), epsilon = 1e-9);
}

#[test]
fn derivations_agree_with_values() {
    let matl = reference_material();
    let vessel = Vessel::new("vessel_1", &matl, 10.0, 5.0, 0.1).unwrap();

    let trace = thin_wall::thin_diameter_reduction_derivation(&vessel, P).unwrap();
    assert_eq!(trace.value(), thin_diameter_reduction(&vessel, P).unwrap());
    assert_eq!(trace.quantity("E"), Some(10.0e6));

    let trace = thick_wall::thick_outer_diameter_reduction_derivation(&vessel, P).unwrap();
    assert_eq!(trace.value(), thick_outer_diameter_reduction(&vessel, P).unwrap());
    assert!(trace.to_plain().contains("Table 13.5"));
}

#[test]
fn sweep_and_analysis_agree() {
    let table = MaterialTable::from_materials(vec![reference_material()]);
    let input = AnalysisInput::new("vessel_1", "reference", 10.0, 5.0, 0.1, 300.0);
    let result = calculate(&input, &table).unwrap();

    let matl = table.lookup("reference").unwrap();
    let vessel = Vessel::new("vessel_1", matl, 10.0, 5.0, 0.1).unwrap();
    let series = sweep_stress(&vessel, StressKind::Hoop, &SweepConfig::new(300.0)).unwrap();

    assert_eq!(result.hoop_series, series);
    assert_eq!(Some(result.hoop_peak), series.peak_magnitude());
    assert_eq!(series.peak(), series.peak_magnitude());
    assert!(result.passes());
}

#[test]
fn csv_table_drives_analysis() {
    let csv = "\
label,type,category,spec,spec_number,DIN_num,density,fy,fu,E,G,v,elongation,area_reduc
test_6061,Aluminum,metal,UNS,A96061,3.3211,0.098,35000,42000,10000000,3800000,0.33,12,0
test_4140,Steel,metal,UNS,G41400,1.7225,0.284,95000,148000,29700000,11600000,0.29,17,48
";
    let table = MaterialTable::from_csv_str(csv).unwrap();
    assert_eq!(table.type_index(), vec!["All", "Aluminum", "Steel"]);

    let input = AnalysisInput::new("Can", "test_4140", 12.0, 4.0, 0.5, 2000.0);
    let result = calculate(&input, &table).unwrap();
    assert_eq!(result.wall_class, WallClass::Thick);
    assert_eq!(result.material.label, "test_4140");
    assert!(result.hoop_peak.value_psi < 0.0);
}
