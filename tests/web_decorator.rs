use lending_autocomplete::{decorator, Config, Decoration, Error, Presentation};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{HtmlOptionElement, HtmlSelectElement};

wasm_bindgen_test_configure!(run_in_browser);

use web_fixture_::{document, titles, type_text, Form};

#[wasm_bindgen_test]
fn unavailable_data_locks() {
	let form = Form::new("decorator_unavailable");

	let decoration = decorator::attach_in(&document(), "decorator_unavailable", Err(Error::DataUnavailable("unparseable payload".to_owned())), &Config::default()).unwrap();

	assert_eq!(decoration.presentation(), Presentation::Locked);
	let field = form.field();
	assert!(field.disabled());
	assert_eq!(field.placeholder(), "locked - no data");
}

#[wasm_bindgen_test]
fn no_candidates_locks() {
	let form = Form::new("decorator_empty");

	let decoration = decorator::attach_in(&document(), "decorator_empty", Ok(vec![]), &Config::default()).unwrap();

	assert!(matches!(decoration, Decoration::Locked(_)));
	let field = form.field();
	assert!(field.disabled());
	assert_eq!(field.placeholder(), "locked - no data");
}

#[wasm_bindgen_test]
fn few_candidates_become_a_dropdown() {
	let form = Form::new("decorator_dropdown");
	let candidates: Vec<String> = (1..=9).map(|i| format!("x{}", i)).collect();

	let select = match decorator::attach_in(&document(), "decorator_dropdown", Ok(candidates), &Config::default()).unwrap() {
		Decoration::Dropdown(select) => select,
		other => panic!("Expected a dropdown but got {:?}", other),
	};

	let found: HtmlSelectElement = document().get_element_by_id("decorator_dropdown").unwrap().dyn_into().unwrap();
	assert!(found.is_same_node(Some(&select)));
	assert_eq!(select.name(), "decorator_dropdown_name");
	assert!(select.next_element_sibling().unwrap().is_same_node(Some(&form.next_field())));

	let options = select.options();
	assert_eq!(options.length(), 10);
	for i in 0..9 {
		let option: HtmlOptionElement = options.item(i).unwrap().dyn_into().unwrap();
		assert_eq!(option.value(), format!("x{}", i + 1));
		assert_eq!(option.text(), format!("x{}", i + 1));
	}

	let placeholder: HtmlOptionElement = options.item(9).unwrap().dyn_into().unwrap();
	assert_eq!(placeholder.text(), "Choose here");
	assert!(placeholder.disabled());
	assert!(placeholder.has_attribute("hidden"));
	assert_eq!(select.selected_index(), 9);

	assert!(form.searchbox().is_none());
}

#[wasm_bindgen_test]
fn many_candidates_get_a_popup() {
	let form = Form::new("decorator_popup");

	let decoration = decorator::attach_in(&document(), "decorator_popup", Ok(titles()), &Config::default()).unwrap();
	let controller = match &decoration {
		Decoration::Popup(controller) => controller,
		other => panic!("Expected a popup but got {:?}", other),
	};

	let field = form.field();
	assert!(!field.disabled());
	assert!(field.is_same_node(Some(&controller.field())));
	assert!(form.searchbox().is_none());

	type_text(&field, "Du");
	assert!(form.searchbox().is_some());
}

#[wasm_bindgen_test]
fn threshold_is_configurable() {
	let _form = Form::new("decorator_threshold");
	let config = Config::default().with_dropdown_threshold(11);

	let decoration = decorator::attach_in(&document(), "decorator_threshold", Ok(titles()), &config).unwrap();

	assert_eq!(decoration.presentation(), Presentation::Dropdown);
}

#[wasm_bindgen_test]
fn placeholders_are_configurable() {
	let form = Form::new("decorator_texts");
	let config = Config::default().with_locked_placeholder("no books yet");

	decorator::attach_in(&document(), "decorator_texts", Ok(vec![]), &config).unwrap();

	assert_eq!(form.field().placeholder(), "no books yet");
}

#[wasm_bindgen_test]
fn missing_field() {
	assert_eq!(
		decorator::attach_in(&document(), "decorator_nowhere", Ok(titles()), &Config::default()).unwrap_err(),
		Error::FieldNotFound("decorator_nowhere".to_owned())
	);
}

#[wasm_bindgen_test]
fn not_an_input() {
	let _form = Form::new("decorator_not_input");

	assert_eq!(
		decorator::attach_in(&document(), "decorator_not_input_elsewhere", Ok(titles()), &Config::default()).unwrap_err(),
		Error::NotAnInput("decorator_not_input_elsewhere".to_owned())
	);
}
