use crate::{
    apriori::{Apriori, FrequentItemsets},
    error::AprioriError,
    types::{FrequentLevels, SupportTable},
};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyFrozenSet};
use pyo3::wrap_pyfunction;

type PyItemName = String;
type PyLevels = Vec<Vec<Vec<PyItemName>>>;

macro_rules! pyfrozenset {
    ($py:expr,$x:expr) => {{
        let set: Py<PyFrozenSet> = PyFrozenSet::new($py, $x)?.into();
        set
    }};
}

#[pymodule]
fn apriori(_: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(frequent_itemsets, m)?)?;
    Ok(())
}

impl From<AprioriError> for PyErr {
    fn from(err: AprioriError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Frequent itemsets of every length, and the support of every itemset examined.
#[pyfunction(max_len = "None")]
#[pyo3(text_signature = "(transactions, min_support, /, max_len=None)")]
fn frequent_itemsets(
    py: Python,
    transactions: Vec<Vec<PyItemName>>,
    min_support: f64,
    max_len: Option<usize>,
) -> PyResult<(PyLevels, Py<PyDict>)> {
    let mut search = Apriori::new(min_support).parallel(true);
    if let Some(max_len) = max_len {
        search = search.max_len(max_len);
    }

    let result: Result<FrequentItemsets<PyItemName>, AprioriError> =
        py.allow_threads(move || search.run(transactions));
    let (levels, support) = result?.into_parts();

    Ok((convert_levels(levels), convert_support(py, support)?))
}

fn convert_levels(levels: FrequentLevels<PyItemName>) -> PyLevels {
    levels
        .into_iter()
        .map(|level| level.into_iter().map(|itemset| itemset.into_vec()).collect())
        .collect()
}

fn convert_support(py: Python, support: SupportTable<PyItemName>) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);
    for (itemset, value) in support {
        dict.set_item(pyfrozenset![py, itemset.as_slice()], value)?;
    }
    Ok(dict.into())
}
