//! Built-in message templates.
//!
//! Templates use `%`-placeholders (see [`template`](crate::i18n::template)).
//! English is the baseline; every baseline key has an English template and
//! the Spanish table mirrors it key for key.

use crate::i18n::MessageKey;

/// English (baseline) templates.
pub(crate) const ENGLISH_STRINGS: &[(MessageKey, &str)] = &[
    // ==================== General ====================
    (MessageKey::REQUIRED, "field is required"),
    // ==================== Strings ====================
    (MessageKey::MIN_LENGTH, "minimum length is %d"),
    (MessageKey::MAX_LENGTH, "maximum length is %d"),
    (MessageKey::LENGTH, "length must be exactly %d"),
    (MessageKey::EMAIL, "invalid email format"),
    (MessageKey::URL, "invalid URL format"),
    (MessageKey::UUID, "invalid UUID format"),
    (MessageKey::PATTERN, "invalid format"),
    (MessageKey::ONE_OF, "must be one of: %v"),
    // ==================== Numbers ====================
    (MessageKey::MIN_VALUE, "must be greater than or equal to %v"),
    (MessageKey::MAX_VALUE, "must be less than or equal to %v"),
    (MessageKey::BETWEEN, "must be between %v and %v"),
    (MessageKey::POSITIVE, "must be positive"),
    (MessageKey::NEGATIVE, "must be negative"),
    (MessageKey::MULTIPLE_OF, "must be a multiple of %v"),
    (MessageKey::POWER_OF_TWO, "must be a power of 2"),
    (MessageKey::MAX_BITS, "must not use more than %d bits"),
    (MessageKey::PORT, "must be a valid port number (1-65535)"),
    (MessageKey::PRECISION, "must have maximum %d decimal places"),
    (MessageKey::FINITE, "must be a finite number"),
    // ==================== Time ====================
    (MessageKey::PAST, "must be in the past"),
    (MessageKey::FUTURE, "must be in the future"),
    (MessageKey::AFTER, "must be after %v"),
    (MessageKey::BEFORE, "must be before %v"),
    (MessageKey::BETWEEN_DATES, "must be between %v and %v"),
    (MessageKey::WEEKDAY, "must be on a valid weekday"),
    (MessageKey::MIN_AGE, "age must be at least %d years"),
    (MessageKey::MAX_AGE, "age cannot exceed %d years"),
    // ==================== Slices ====================
    (MessageKey::SLICE_REQUIRED, "field is required"),
    (MessageKey::SLICE_MIN_LENGTH, "must have at least %d elements"),
    (MessageKey::SLICE_MAX_LENGTH, "must have maximum %d elements"),
    (MessageKey::SLICE_LENGTH, "must have exactly %d elements"),
    (
        MessageKey::SLICE_MIN,
        "element at position %d must be greater than or equal to %v",
    ),
    (
        MessageKey::SLICE_MAX,
        "element at position %d must be less than or equal to %v",
    ),
    (
        MessageKey::SLICE_BETWEEN,
        "element at position %d must be between %v and %v",
    ),
    (MessageKey::UNIQUE, "duplicate value found at index %d"),
];

/// Spanish templates.
pub(crate) const SPANISH_STRINGS: &[(MessageKey, &str)] = &[
    // ==================== General ====================
    (MessageKey::REQUIRED, "el campo es requerido"),
    // ==================== Strings ====================
    (MessageKey::MIN_LENGTH, "la longitud mínima es %d"),
    (MessageKey::MAX_LENGTH, "la longitud máxima es %d"),
    (MessageKey::LENGTH, "la longitud debe ser exactamente %d"),
    (MessageKey::EMAIL, "formato de correo electrónico inválido"),
    (MessageKey::URL, "formato de URL inválido"),
    (MessageKey::UUID, "formato de UUID inválido"),
    (MessageKey::PATTERN, "formato inválido"),
    (MessageKey::ONE_OF, "debe ser uno de: %v"),
    // ==================== Numbers ====================
    (MessageKey::MIN_VALUE, "debe ser mayor o igual a %v"),
    (MessageKey::MAX_VALUE, "debe ser menor o igual a %v"),
    (MessageKey::BETWEEN, "debe estar entre %v y %v"),
    (MessageKey::POSITIVE, "debe ser positivo"),
    (MessageKey::NEGATIVE, "debe ser negativo"),
    (MessageKey::MULTIPLE_OF, "debe ser múltiplo de %v"),
    (MessageKey::POWER_OF_TWO, "debe ser una potencia de 2"),
    (MessageKey::MAX_BITS, "no debe usar más de %d bits"),
    (
        MessageKey::PORT,
        "debe ser un número de puerto válido (1-65535)",
    ),
    (MessageKey::PRECISION, "debe tener máximo %d decimales"),
    (MessageKey::FINITE, "debe ser un número finito"),
    // ==================== Time ====================
    (MessageKey::PAST, "debe estar en el pasado"),
    (MessageKey::FUTURE, "debe estar en el futuro"),
    (MessageKey::AFTER, "debe ser posterior a %v"),
    (MessageKey::BEFORE, "debe ser anterior a %v"),
    (MessageKey::BETWEEN_DATES, "debe estar entre %v y %v"),
    (MessageKey::WEEKDAY, "debe ser un día válido de la semana"),
    (MessageKey::MIN_AGE, "la edad debe ser al menos %d años"),
    (MessageKey::MAX_AGE, "la edad no puede exceder %d años"),
    // ==================== Slices ====================
    (MessageKey::SLICE_REQUIRED, "el campo es requerido"),
    (MessageKey::SLICE_MIN_LENGTH, "debe tener al menos %d elementos"),
    (MessageKey::SLICE_MAX_LENGTH, "debe tener máximo %d elementos"),
    (MessageKey::SLICE_LENGTH, "debe tener exactamente %d elementos"),
    (
        MessageKey::SLICE_MIN,
        "el elemento en la posición %d debe ser mayor o igual a %v",
    ),
    (
        MessageKey::SLICE_MAX,
        "el elemento en la posición %d debe ser menor o igual a %v",
    ),
    (
        MessageKey::SLICE_BETWEEN,
        "el elemento en la posición %d debe estar entre %v y %v",
    ),
    (MessageKey::UNIQUE, "valor duplicado encontrado en el índice %d"),
];
