use lib_clustalo::{
    Aligner, AlignmentOptions, Error, SequenceRecord, SequenceType, ValidationError,
};
use log::debug;
use pyo3::{
    exceptions::{PyRuntimeError, PyValueError},
    prelude::*,
    types::PyDict,
};
use pythonize::depythonize;

/// Validation errors become `ValueError`, failures of the aligner `RuntimeError`.
fn to_py_err(error: Error) -> PyErr {
    match error {
        Error::Validation(error) => PyValueError::new_err(error.to_string()),
        Error::Execution(error) => PyRuntimeError::new_err(error.to_string()),
    }
}

fn validation_err(error: ValidationError) -> PyErr {
    to_py_err(error.into())
}

fn py_repr(o: &Bound<'_, PyAny>) -> String {
    o.repr()
        .map(|repr| repr.to_string())
        .unwrap_or_else(|_| "an unrepresentable object".to_string())
}

fn extract_records(seqs: &Bound<'_, PyAny>) -> PyResult<Vec<SequenceRecord>> {
    let seqs = seqs.downcast::<PyDict>().map_err(|_| {
        let type_name = seqs
            .get_type()
            .name()
            .map(|name| name.to_string())
            .unwrap_or_default();
        validation_err(ValidationError::NotAMapping(type_name))
    })?;

    seqs.iter()
        .map(|(key, value)| {
            let name: String = key
                .extract()
                .map_err(|_| validation_err(ValidationError::NonStringKey(py_repr(&key))))?;
            let sequence: String = value.extract().map_err(|_| {
                validation_err(ValidationError::NonStringValue {
                    name: name.clone(),
                    value: py_repr(&value),
                })
            })?;
            Ok(SequenceRecord::new(name, sequence))
        })
        .collect()
}

/// Executes clustal omega.
///
/// Aligns the sequences of the dict `seqs`, which maps names to sequences, and returns a dict mapping the same names to the aligned sequences.
/// `seqtype` is one of `DNA`, `RNA`, `PROTEIN` or `UNKNOWN`; sequences are checked against its alphabet, ignoring case.
/// Further keyword arguments are alignment options: `num_threads` (alias `threads`), `mbed_guide_tree`, `mbed_iteration`,
/// `num_combined_iterations`, `max_guidetree_iterations` and `max_hmm_iterations`.
#[pyfunction(name = "clustalo")]
#[pyo3(signature = (seqs, seqtype = SequenceType::Dna.code(), **options))]
fn align_sequences<'py>(
    py: Python<'py>,
    seqs: &Bound<'py, PyAny>,
    seqtype: i32,
    options: Option<&Bound<'py, PyDict>>,
) -> PyResult<Bound<'py, PyDict>> {
    let sequence_type = SequenceType::try_from(seqtype).map_err(validation_err)?;
    let options: AlignmentOptions = match options {
        Some(options) => depythonize(options)
            .map_err(|error| PyValueError::new_err(format!("Invalid alignment options: {error}")))?,
        None => AlignmentOptions::default(),
    };
    let records = extract_records(seqs)?;
    debug!(
        "Aligning {} sequences of type {sequence_type} with {options:?}",
        records.len()
    );

    let aligner = Aligner::clustalo().with_options(options);
    let alignment = py
        .detach(move || aligner.align(records, sequence_type))
        .map_err(to_py_err)?;

    let result = PyDict::new(py);
    for record in alignment {
        result.set_item(record.name, record.sequence)?;
    }
    Ok(result)
}

/// Bindings for the Clustal Omega multiple sequence aligner.
#[pymodule]
fn clustalo(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("UNKNOWN", SequenceType::Unknown.code())?;
    m.add("DNA", SequenceType::Dna.code())?;
    m.add("RNA", SequenceType::Rna.code())?;
    m.add("PROTEIN", SequenceType::Protein.code())?;
    m.add_function(wrap_pyfunction!(align_sequences, m)?)?;
    Ok(())
}
